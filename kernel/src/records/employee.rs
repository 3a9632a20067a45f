// Employee Records
//
// Staff share one base shape. Managers and salespeople carry extra
// role data, selected by the `kind` tag of `EmployeeRole`.

use serde::{Deserialize, Serialize};

use super::{decimal, Entity, EntityKind, FieldError, FieldValue};

/// Patchable employee field names. Role data is set on creation only.
pub mod fields {
    pub const NAME: &str = "name";
    pub const DEPARTMENT: &str = "department";
    pub const JOB_TITLE: &str = "job_title";
    pub const BASIC_SALARY: &str = "basic_salary";
    pub const AGE: &str = "age";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const PASSPORT_DETAILS: &str = "passport_details";
    pub const MANAGER_ID: &str = "manager_id";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub job_title: String,
    pub basic_salary: f64,
    pub age: u32,
    pub date_of_birth: String,
    pub passport_details: String,

    /// Id of this employee's manager, if any. Not checked against the store.
    #[serde(default)]
    pub manager_id: Option<String>,

    #[serde(default)]
    pub role: EmployeeRole,
}

/// Role-specific data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmployeeRole {
    #[default]
    Staff,

    Manager {
        team_size: u32,
        department_budget: f64,
    },

    Salesperson {
        sales_target: f64,
        /// Fraction of sales paid as commission, e.g. `0.05`.
        commission_rate: f64,
    },
}

impl EmployeeRole {
    pub fn title(&self) -> &'static str {
        match self {
            EmployeeRole::Staff => "Staff",
            EmployeeRole::Manager { .. } => "Manager",
            EmployeeRole::Salesperson { .. } => "Salesperson",
        }
    }
}

impl Employee {
    /// A staff employee with no manager.
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        job_title: impl Into<String>,
        basic_salary: f64,
        age: u32,
        date_of_birth: impl Into<String>,
        passport_details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            job_title: job_title.into(),
            basic_salary,
            age,
            date_of_birth: date_of_birth.into(),
            passport_details: passport_details.into(),
            manager_id: None,
            role: EmployeeRole::Staff,
        }
    }

    pub fn with_manager(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    pub fn with_role(mut self, role: EmployeeRole) -> Self {
        self.role = role;
        self
    }
}

impl Entity for Employee {
    const KIND: EntityKind = EntityKind::Employee;

    const MUTABLE_FIELDS: &'static [&'static str] = &[
        fields::NAME,
        fields::DEPARTMENT,
        fields::JOB_TITLE,
        fields::BASIC_SALARY,
        fields::AGE,
        fields::DATE_OF_BIRTH,
        fields::PASSPORT_DETAILS,
        fields::MANAGER_ID,
    ];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            fields::NAME => self.name = value.into_text()?,
            fields::DEPARTMENT => self.department = value.into_text()?,
            fields::JOB_TITLE => self.job_title = value.into_text()?,
            fields::BASIC_SALARY => self.basic_salary = value.into_decimal()?,
            fields::AGE => self.age = value.into_count()?,
            fields::DATE_OF_BIRTH => self.date_of_birth = value.into_text()?,
            fields::PASSPORT_DETAILS => self.passport_details = value.into_text()?,
            fields::MANAGER_ID => self.manager_id = value.into_optional_text()?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Name", self.name.clone()),
            ("Role", self.role.title().to_string()),
            ("Department", self.department.clone()),
            ("Job Title", self.job_title.clone()),
            ("Basic Salary", decimal(self.basic_salary)),
            ("Age", self.age.to_string()),
            ("Date of Birth", self.date_of_birth.clone()),
            ("Passport Details", self.passport_details.clone()),
        ];

        if let Some(manager_id) = &self.manager_id {
            lines.push(("Manager ID", manager_id.clone()));
        }

        match &self.role {
            EmployeeRole::Staff => {}
            EmployeeRole::Manager {
                team_size,
                department_budget,
            } => {
                lines.push(("Team Size", team_size.to_string()));
                lines.push(("Department Budget", decimal(*department_budget)));
            }
            EmployeeRole::Salesperson {
                sales_target,
                commission_rate,
            } => {
                lines.push(("Sales Target", decimal(*sales_target)));
                lines.push(("Commission Rate", decimal(*commission_rate)));
            }
        }

        lines
    }
}
