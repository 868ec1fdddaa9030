//! Range invariants for settings and inputs.

use serde::Serialize;

use crate::error::{GenError, Result};
use crate::model::{Input, Setting};

pub trait Validate {
    /// Identifier used in error messages.
    fn name(&self) -> &str;

    /// The first broken invariant, if any.
    fn violation(&self) -> Option<String>;

    fn validate(&self) -> Result<()>
    where
        Self: Serialize + std::fmt::Debug,
    {
        match self.violation() {
            None => Ok(()),
            Some(message) => Err(GenError::Validation {
                name: self.name().to_string(),
                message,
                dump: serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}")),
            }),
        }
    }
}

impl Validate for Setting {
    fn name(&self) -> &str {
        &self.cname
    }

    fn violation(&self) -> Option<String> {
        let Some(default) = self.default.as_ref() else {
            return Some("default must not be null".into());
        };
        let def = default.value();

        // unbounded on either side skips the ordering checks
        if let (Some(min), Some(max)) = (&self.minimum, &self.maximum) {
            let (lo, hi) = (min.value(), max.value());
            if lo > def {
                return Some(format!("minimum {min} is above default {default}"));
            }
            if hi < def {
                return Some(format!("maximum {max} is below default {default}"));
            }
            if lo >= hi {
                return Some(format!("minimum {min} is not below maximum {max}"));
            }
        }
        None
    }
}

impl Validate for Input {
    fn name(&self) -> &str {
        &self.cname
    }

    fn violation(&self) -> Option<String> {
        let Some(normal) = self.normal.as_ref() else {
            return Some("normal must not be null".into());
        };
        let norm = normal.value();
        let (soft_min, soft_max) = (&self.soft_minimum, &self.soft_maximum);

        if let Some(hard_max) = &self.hard_maximum {
            if hard_max.value() < soft_max.value() {
                return Some(format!(
                    "hard_maximum {hard_max} is below soft_maximum {soft_max}"
                ));
            }
            if hard_max.value() < norm {
                return Some(format!("hard_maximum {hard_max} is below normal {normal}"));
            }
        }
        if let Some(hard_min) = &self.hard_minimum {
            if hard_min.value() > soft_min.value() {
                return Some(format!(
                    "hard_minimum {hard_min} is above soft_minimum {soft_min}"
                ));
            }
            if hard_min.value() > norm {
                return Some(format!("hard_minimum {hard_min} is above normal {normal}"));
            }
        }
        if let (Some(hard_min), Some(hard_max)) = (&self.hard_minimum, &self.hard_maximum)
            && hard_min.value() >= hard_max.value()
        {
            return Some(format!(
                "hard_minimum {hard_min} is not below hard_maximum {hard_max}"
            ));
        }
        if soft_min.value() >= soft_max.value() {
            return Some(format!(
                "soft_minimum {soft_min} is not below soft_maximum {soft_max}"
            ));
        }
        if soft_min.value() > norm {
            return Some(format!("soft_minimum {soft_min} is above normal {normal}"));
        }
        if soft_max.value() < norm {
            return Some(format!("soft_maximum {soft_max} is below normal {normal}"));
        }
        None
    }
}
