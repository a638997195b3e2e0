//! Sample records shown by the viewer.

use beantable_lib::error::FieldError;
use beantable_lib::model::BeanRecord;
use beantable_lib::model::DirectiveKind;
use beantable_lib::model::FieldAccess;
use beantable_lib::model::FieldType;
use beantable_lib::model::Primitive;
use beantable_lib::model::Value;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One scheduled job as tracked by a batch scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub running: bool,
    pub enabled: bool,
    pub retries: Option<i32>,
    pub started: Option<DateTime<Utc>>,
    pub token: String,
}

impl BeanRecord for Job {
    fn fields() -> Vec<FieldAccess<Self>> {
        vec![
            FieldAccess::new("id", FieldType::LONG, |j: &Job| j.id).display_name("Id"),
            FieldAccess::new("name", FieldType::Text, |j: &Job| j.name.clone())
                .display_name("Job")
                .tooltip("Job name, editable while the job is idle")
                .setter(|j, v| {
                    if j.running {
                        return Err(FieldError::ReadOnly);
                    }
                    j.name = v.into_string()?;
                    Ok(())
                }),
            FieldAccess::new("owner", FieldType::Text, |j: &Job| j.owner.clone())
                .display_name("Owner"),
            FieldAccess::new("enabled", FieldType::BOOL, |j: &Job| j.enabled)
                .display_name("Enabled")
                .setter(|j, v| {
                    j.enabled = v.into_bool()?;
                    Ok(())
                }),
            FieldAccess::new("retries", FieldType::Boxed(Primitive::Int), |j: &Job| j.retries)
                .display_name("Retries")
                .setter(|j, v| {
                    j.retries = if v.is_null() { None } else { Some(v.into_i32()?) };
                    Ok(())
                }),
            FieldAccess::try_new("started", FieldType::Date, |j: &Job| {
                j.started
                    .map(Value::from)
                    .ok_or_else(|| FieldError::failed("job has not started"))
            })
            .display_name("Started"),
            FieldAccess::new("token", FieldType::Text, |j: &Job| j.token.clone()),
        ]
    }

    fn static_directive(kind: DirectiveKind) -> Option<String> {
        match kind {
            DirectiveKind::Editable => Some("name enabled retries".into()),
            DirectiveKind::Hidden => Some("token".into()),
        }
    }

    fn editable(&self) -> Option<bool> {
        Some(!self.running)
    }
}

/// A handful of jobs with a mix of states.
pub fn sample(now: DateTime<Utc>) -> Vec<Job> {
    let job = |id: i64, name: &str, owner: &str, running: bool, retries, started| Job {
        id,
        name: name.to_string(),
        owner: owner.to_string(),
        running,
        enabled: true,
        retries,
        started,
        token: format!("tok-{id:04}"),
    };

    vec![
        job(1, "nightly-backup", "ops", false, Some(3), Some(now - Duration::hours(7))),
        job(2, "index-rebuild", "search", true, None, Some(now - Duration::minutes(12))),
        job(3, "report-export", "finance", false, Some(0), None),
        job(4, "archive-2019", "ops", false, Some(1), Some(now - Duration::days(700))),
    ]
}
