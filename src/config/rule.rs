//! Rules that alter the appearance of individual data points.

use crate::config::Collection;
use crate::config::Element;
use crate::config::RELATIVE;
use crate::config::Value;
use crate::config::write_optional;
use crate::config::write_optional_unit;
use crate::config::write_parameter;

/// A `<rule>` block.
///
/// A rule is applied to every data point (or link) for which `condition`
/// holds. `flow`, `radius1`, and `radius2` are only meaningful for link rules.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// The condition under which the rule applies.
    pub condition: Option<String>,
    /// The color given to matching data points.
    pub color: Option<String>,
    /// Whether matching data points are drawn.
    pub show: bool,
    /// How rule evaluation continues after a match (e.g., `continue`).
    pub flow: Option<String>,
    /// The radius of the start of a matching link.
    pub radius1: Option<f64>,
    /// The radius of the end of a matching link.
    pub radius2: Option<f64>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            condition: None,
            color: None,
            show: true,
            flow: None,
            radius1: None,
            radius2: None,
        }
    }
}

impl Element for Rule {
    const BLOCK: &'static str = "rules";
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<rule>")?;
        write_optional(f, "condition", self.condition.as_deref())?;
        write_optional(f, "color", self.color.as_deref())?;
        write_parameter(f, "show", Value::from(self.show))?;
        write_optional(f, "flow", self.flow.as_deref())?;
        write_optional_unit(f, "radius1", self.radius1, RELATIVE)?;
        write_optional_unit(f, "radius2", self.radius2, RELATIVE)?;
        write!(f, "</rule>")
    }
}

/// A `<rules>` block.
pub type Rules = Collection<Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_display() {
        assert_eq!(Rule::default().to_string(), "<rule>\nshow = yes\n</rule>");
    }

    #[test]
    fn test_link_rule_display() {
        let rule = Rule {
            condition: Some(String::from("var(intrachr)")),
            show: false,
            flow: Some(String::from("continue")),
            radius1: Some(0.5),
            ..Default::default()
        };

        assert_eq!(
            rule.to_string(),
            "<rule>\ncondition = var(intrachr)\nshow = no\nflow = continue\nradius1 = \
             0.5r\n</rule>"
        );
    }

    #[test]
    fn test_rules_display() {
        let rules = Rules::new(vec![
            Rule {
                color: Some(String::from("red")),
                ..Default::default()
            },
            Rule::default(),
        ]);

        assert_eq!(
            rules.to_string(),
            "<rules>\n<rule>\ncolor = red\nshow = yes\n</rule>\n<rule>\nshow = \
             yes\n</rule>\n</rules>"
        );
    }
}
