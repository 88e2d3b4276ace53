//! Workout session payload validation

use serde_json::Value;

use super::validation::{RecordReader, ValidationErrors};

/// Fields a workout payload must carry, in schema order.
pub const WORKOUT_FIELDS: [&str; 3] = ["date", "member_id", "workout_type"];

/// Validated workout payload for insert or full-record update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    /// Calendar date, stored verbatim
    pub date: String,
    pub member_id: i64,
    pub workout_type: String,
}

impl NewWorkout {
    /// Validate an untyped JSON record into a workout payload.
    ///
    /// `member_id` accepts integers, integral floats and decimal strings.
    /// `sesh_id` is server-generated and dropped if supplied.
    pub fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = RecordReader::new(value, &WORKOUT_FIELDS, &["sesh_id"]);

        let date = reader.string("date");
        let member_id = reader.integer("member_id");
        let workout_type = reader.string("workout_type");

        match (reader.finish(), date, member_id, workout_type) {
            (Ok(()), Some(date), Some(member_id), Some(workout_type)) => Ok(Self {
                date,
                member_id,
                workout_type,
            }),
            (result, ..) => Err(result.err().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_workout() {
        let value = json!({"date": "2024-05-01", "member_id": 3, "workout_type": "legs"});
        let workout = NewWorkout::from_json(&value).unwrap();
        assert_eq!(
            workout,
            NewWorkout {
                date: "2024-05-01".into(),
                member_id: 3,
                workout_type: "legs".into(),
            }
        );
    }

    #[test]
    fn coerces_member_id() {
        let value = json!({"date": "2024-05-01", "member_id": "12", "workout_type": "legs"});
        assert_eq!(NewWorkout::from_json(&value).unwrap().member_id, 12);

        let value = json!({"date": "2024-05-01", "member_id": 12.0, "workout_type": "legs"});
        assert_eq!(NewWorkout::from_json(&value).unwrap().member_id, 12);
    }

    #[test]
    fn ignores_sesh_id() {
        let value = json!({
            "sesh_id": 1,
            "date": "2024-05-01",
            "member_id": 3,
            "workout_type": "legs"
        });
        assert!(NewWorkout::from_json(&value).is_ok());
    }

    #[test]
    fn rejects_bad_member_id() {
        for bad in [json!("three"), json!(3.5), json!(true), json!({})] {
            let value = json!({"date": "2024-05-01", "member_id": bad, "workout_type": "legs"});
            let errors = NewWorkout::from_json(&value).unwrap_err();
            assert_eq!(errors.fields()["member_id"], vec!["Not a valid integer."]);
        }
    }

    #[test]
    fn reports_all_violations() {
        let value = json!({"date": 20240501, "workout_type": null});
        let errors = NewWorkout::from_json(&value).unwrap_err();
        let fields = errors.fields();

        assert_eq!(errors.len(), 3);
        assert_eq!(fields["date"], vec!["Not a valid string."]);
        assert_eq!(fields["member_id"], vec!["Missing data for required field."]);
        assert_eq!(fields["workout_type"], vec!["Field may not be null."]);
    }
}
