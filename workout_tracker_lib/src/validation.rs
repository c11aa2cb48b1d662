use std::fmt;

use thiserror::Error;

use crate::kind::{FormField, Kind};

/// Read access to the raw text of the workout form.
pub trait FormFields {
    fn value(&self, field: FormField) -> String;
}

/// Form contents captured as plain strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawForm {
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation_gain: String,
}

impl FormFields for RawForm {
    fn value(&self, field: FormField) -> String {
        match field {
            FormField::Distance => self.distance.clone(),
            FormField::Duration => self.duration.clone(),
            FormField::Cadence => self.cadence.clone(),
            FormField::ElevationGain => self.elevation_gain.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    NotANumber,
    NotFinite,
    NotPositive,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Problem::NotANumber => "not a number",
            Problem::NotFinite => "not finite",
            Problem::NotPositive => "must be positive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {problem}")]
pub struct ValidationError {
    pub field: FormField,
    pub problem: Problem,
}

/// Inputs that passed validation for one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub kind: Kind,
    pub distance: f64,
    pub duration: f64,
    pub field_value: f64,
}

/// Every numeric input of `kind` has to be a finite, strictly positive number.
pub fn validate(kind: Kind, form: &impl FormFields) -> Result<WorkoutInput, ValidationError> {
    Ok(WorkoutInput {
        kind,
        distance: positive_number(form, FormField::Distance)?,
        duration: positive_number(form, FormField::Duration)?,
        field_value: positive_number(form, kind.profile().field)?,
    })
}

fn positive_number(form: &impl FormFields, field: FormField) -> Result<f64, ValidationError> {
    let fail = |problem| ValidationError { field, problem };
    let value: f64 = form.value(field).trim().parse().map_err(|_| fail(Problem::NotANumber))?;
    if !value.is_finite() {
        return Err(fail(Problem::NotFinite));
    }
    if value <= 0. {
        return Err(fail(Problem::NotPositive));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(distance: &str, duration: &str, cadence: &str, elevation_gain: &str) -> RawForm {
        RawForm {
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            elevation_gain: elevation_gain.into(),
        }
    }

    #[test]
    fn accepts_positive_numbers() {
        let input = validate(Kind::Running, &form("5", " 30 ", "170", "")).unwrap();
        assert_eq!(input, WorkoutInput { kind: Kind::Running, distance: 5., duration: 30., field_value: 170. });

        let input = validate(Kind::Cycling, &form("20", "60", "", "300")).unwrap();
        assert_eq!(input.field_value, 300.);
    }

    #[test]
    fn rejects_bad_inputs() {
        let cases = [
            (form("-5", "30", "170", ""), FormField::Distance, Problem::NotPositive),
            (form("5", "abc", "170", ""), FormField::Duration, Problem::NotANumber),
            (form("", "30", "170", ""), FormField::Distance, Problem::NotANumber),
            (form("5", "inf", "170", ""), FormField::Duration, Problem::NotFinite),
            (form("NaN", "30", "170", ""), FormField::Distance, Problem::NotFinite),
            (form("5", "30", "0", ""), FormField::Cadence, Problem::NotPositive),
        ];
        for (form, field, problem) in cases {
            assert_eq!(validate(Kind::Running, &form), Err(ValidationError { field, problem }));
        }
    }

    #[test]
    fn elevation_gain_must_be_positive_too() {
        let err = validate(Kind::Cycling, &form("20", "60", "", "-10")).unwrap_err();
        assert_eq!(err, ValidationError { field: FormField::ElevationGain, problem: Problem::NotPositive });
    }

    #[test]
    fn only_the_selected_kind_field_is_checked() {
        assert!(validate(Kind::Running, &form("5", "30", "170", "garbage")).is_ok());
        assert!(validate(Kind::Cycling, &form("5", "30", "garbage", "12")).is_ok());
    }
}
