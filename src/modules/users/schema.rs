use std::collections::BTreeMap;
use validator::Validate;

use crate::error::AdminError;
use crate::store::Value;

#[derive(Debug, Validate)]
pub struct InspectUserArgs {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
}

impl InspectUserArgs {
    pub fn from_args(args: &[String]) -> Result<Self, AdminError> {
        let [email] = args else {
            return Err(AdminError::Usage("check_user <email>".to_string()));
        };
        let parsed = Self {
            email: email.trim().to_string(),
        };
        parsed.validate()?;
        Ok(parsed)
    }
}

#[derive(Debug, Validate)]
pub struct AssignPlanArgs {
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "Plan name cannot be empty"))]
    pub plan_name: String,
}

impl AssignPlanArgs {
    pub fn from_args(args: &[String]) -> Result<Self, AdminError> {
        let [email, plan_name] = args else {
            return Err(AdminError::Usage(
                "update_user_plan <email> <plan_name>  (e.g. update_user_plan user@example.com \"Plan Iniciado\")"
                    .to_string(),
            ));
        };
        let parsed = Self {
            email: email.trim().to_string(),
            plan_name: plan_name.trim().to_string(),
        };
        parsed.validate()?;
        Ok(parsed)
    }
}

/// The membership-related fields of one user, each possibly absent.
#[derive(Debug, Clone)]
pub struct UserInspection {
    pub id: String,
    pub email: String,
    pub plan_name: Option<Value>,
    pub class_limit: Option<Value>,
    pub classes_per_month: Option<Value>,
    pub membership_status: Option<Value>,
    pub fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone)]
pub struct MigratedUser {
    pub id: String,
    pub email: String,
    pub previous_limit: Value,
}

#[derive(Debug, Clone)]
pub struct CleanedUser {
    pub id: String,
    pub email: String,
    pub dropped_limit: Value,
    pub classes_per_month: Value,
}

#[derive(Debug, Default)]
pub struct AllowanceBackfillReport {
    pub migrated: Vec<MigratedUser>,
    pub cleaned: Vec<CleanedUser>,
    pub untouched: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AssignPlanReport {
    pub user_id: String,
    pub email: String,
    pub plan_id: String,
    pub plan_name: String,
    /// `None` means the plan is unlimited.
    pub classes_per_month: Option<Value>,
}
