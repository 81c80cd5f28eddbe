//! Dependency constraint translation.
//!
//! Gem requirements such as `~> 1.2.3` are rewritten into ebuild atoms.
//! A pessimistic requirement becomes a lower and an upper bound:
//!
//! ```text
//! ~> 1.2.3   =>   >=dev-ruby/foo-1.2.3
//!                 <dev-ruby/foo-1.3
//! ```
//!
//! A requirement on version `0` means "any version" and becomes the bare
//! atom `dev-ruby/foo`.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::error::{EbuildgenError, Result};
use crate::registry::Dependency;

/// Category every gem dependency lives in.
pub const NAMESPACE_PREFIX: &str = "dev-ruby/";

/// Joins the lines of a dependency clause.
pub const LINE_SEPARATOR: &str = "\n\t";

/// Eclass function declaring runtime dependencies.
pub const RDEPEND_DIRECTIVE: &str = "ruby_add_rdepend";

/// Eclass function declaring build dependencies.
pub const BDEPEND_DIRECTIVE: &str = "ruby_add_bdepend";

const VERSION_SEPARATOR: &str = "-";

fn requirement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\S+) (\S+)$").expect("requirement pattern is valid")
    })
}

/// Comparison operators a requirement may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Pessimistic,
    GreaterOrEqual,
    LessOrEqual,
    Equal,
    NotEqual,
    Greater,
    Less,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "~>" => Some(Operator::Pessimistic),
            ">=" => Some(Operator::GreaterOrEqual),
            "<=" => Some(Operator::LessOrEqual),
            "=" => Some(Operator::Equal),
            "!=" => Some(Operator::NotEqual),
            ">" => Some(Operator::Greater),
            "<" => Some(Operator::Less),
            _ => None,
        }
    }

    /// The operator as written in the requirement.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Pessimistic => "~>",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::Less => "<",
        }
    }
}

/// A single `<operator> <version>` requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub operator: Operator,
    pub version: String,
}

impl Requirement {
    /// Parse a requirement such as `"~> 1.2.3"`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRequirement` when the input is not an operator
    /// and a version separated by a single space.
    pub fn parse(dependency: &str, input: &str) -> Result<Self> {
        let malformed = |reason: &str| EbuildgenError::MalformedRequirement {
            dependency: dependency.to_string(),
            requirement: input.to_string(),
            reason: reason.to_string(),
        };

        let captures = requirement_pattern()
            .captures(input.trim())
            .ok_or_else(|| malformed("expected '<operator> <version>'"))?;

        let operator =
            Operator::from_token(&captures[1]).ok_or_else(|| malformed("unknown operator"))?;

        Ok(Self {
            operator,
            version: captures[2].to_string(),
        })
    }

    /// Whether this requirement accepts any version.
    pub fn is_unbounded(&self) -> bool {
        self.version == "0"
    }
}

/// Compute the exclusive upper bound of a pessimistic requirement.
///
/// The final component is dropped and the new final component is
/// incremented: `1.2.3` becomes `1.3`, `2.0` becomes `3`. A version with
/// a single component is incremented in place.
///
/// Returns `None` when the component to increment is not a number.
pub fn pessimistic_upper_bound(version: &str) -> Option<String> {
    let mut parts: Vec<String> = version.split('.').map(str::to_string).collect();
    if parts.len() > 1 {
        parts.pop();
    }

    let last = parts.last_mut()?;
    let bumped = last.parse::<u64>().ok()?.checked_add(1)?;
    *last = bumped.to_string();

    Some(parts.join("."))
}

fn atom(operator: &str, name: &str, version: &str) -> String {
    let separator = if version.is_empty() {
        ""
    } else {
        VERSION_SEPARATOR
    };
    format!(
        "{}{}{}{}{}",
        operator, NAMESPACE_PREFIX, name, separator, version
    )
}

/// Translate one requirement of `name` into one or two ebuild atoms.
pub fn translate_requirement(name: &str, requirement: &Requirement) -> Result<Vec<String>> {
    if requirement.is_unbounded() {
        return Ok(vec![atom("", name, "")]);
    }

    match requirement.operator {
        Operator::Pessimistic => {
            let upper = pessimistic_upper_bound(&requirement.version).ok_or_else(|| {
                EbuildgenError::MalformedRequirement {
                    dependency: name.to_string(),
                    requirement: format!("~> {}", requirement.version),
                    reason: "version component is not numeric".to_string(),
                }
            })?;
            Ok(vec![
                atom(">=", name, &requirement.version),
                atom("<", name, &upper),
            ])
        }
        other => Ok(vec![atom(other.as_str(), name, &requirement.version)]),
    }
}

/// Translate every requirement of every dependency into ebuild atoms.
pub fn dependency_lines(dependencies: &[Dependency]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for dep in dependencies {
        let mut any = false;
        for raw in dep.requirements() {
            any = true;
            let requirement = Requirement::parse(&dep.name, raw)?;
            lines.extend(translate_requirement(&dep.name, &requirement)?);
        }
        if !any {
            warn!("Dependency '{}' has no requirements; skipping", dep.name);
        }
    }

    Ok(lines)
}

/// Wrap the atoms of `dependencies` in `directive`.
///
/// An empty dependency list produces an empty string, not an empty directive.
pub fn dependency_clause(directive: &str, dependencies: &[Dependency]) -> Result<String> {
    let lines = dependency_lines(dependencies)?;
    if lines.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{} \"{}\"", directive, lines.join(LINE_SEPARATOR)))
}

/// Build the runtime dependency clause.
pub fn rdepend_clause(dependencies: &[Dependency]) -> Result<String> {
    dependency_clause(RDEPEND_DIRECTIVE, dependencies)
}

/// Build the build-time dependency clause.
pub fn bdepend_clause(dependencies: &[Dependency]) -> Result<String> {
    dependency_clause(BDEPEND_DIRECTIVE, dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(name: &str, raw: &str) -> Vec<String> {
        let req = Requirement::parse(name, raw).unwrap();
        translate_requirement(name, &req).unwrap()
    }

    #[test]
    fn parses_operator_and_version() {
        let req = Requirement::parse("rack", "~> 1.2.3").unwrap();
        assert_eq!(req.operator, Operator::Pessimistic);
        assert_eq!(req.version, "1.2.3");
    }

    #[test]
    fn rejects_missing_space() {
        let err = Requirement::parse("rack", "~>1.2").unwrap_err();
        assert!(matches!(err, EbuildgenError::MalformedRequirement { .. }));
    }

    #[test]
    fn rejects_extra_tokens() {
        assert!(Requirement::parse("rack", ">= 1.0 beta").is_err());
    }

    #[test]
    fn rejects_unknown_operator() {
        let err = Requirement::parse("rack", "=~ 1.0").unwrap_err();
        match err {
            EbuildgenError::MalformedRequirement { reason, .. } => {
                assert_eq!(reason, "unknown operator")
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn rejects_bare_version() {
        let err = Requirement::parse("rack", "1.0").unwrap_err();
        assert!(err.to_string().contains("expected '<operator> <version>'"));
    }

    #[test]
    fn pessimistic_two_component_bumps_major() {
        assert_eq!(
            translate("bar", "~> 1.2"),
            vec![">=dev-ruby/bar-1.2", "<dev-ruby/bar-2"]
        );
    }

    #[test]
    fn upper_bound_drops_last_and_increments() {
        assert_eq!(pessimistic_upper_bound("1.2.3").as_deref(), Some("1.3"));
        assert_eq!(pessimistic_upper_bound("2.0").as_deref(), Some("3"));
        assert_eq!(pessimistic_upper_bound("0.9.10.1").as_deref(), Some("0.9.11"));
    }

    #[test]
    fn upper_bound_of_single_component_increments_it() {
        assert_eq!(pessimistic_upper_bound("4").as_deref(), Some("5"));
    }

    #[test]
    fn upper_bound_ignores_non_numeric_dropped_component() {
        assert_eq!(pessimistic_upper_bound("1.0.rc1").as_deref(), Some("1.1"));
    }

    #[test]
    fn upper_bound_rejects_non_numeric_component() {
        assert_eq!(pessimistic_upper_bound("1.rc.2"), None);
    }

    #[test]
    fn upper_bound_keeps_one_fewer_component() {
        for version in ["1.2", "1.2.3", "10.20.30.40", "0.0.1"] {
            let upper = pessimistic_upper_bound(version).unwrap();
            let parts: Vec<&str> = version.split('.').collect();
            let upper_parts: Vec<&str> = upper.split('.').collect();
            assert_eq!(upper_parts.len(), parts.len() - 1);
            let expected = parts[parts.len() - 2].parse::<u64>().unwrap() + 1;
            assert_eq!(upper_parts.last().unwrap().parse::<u64>().unwrap(), expected);
        }
    }

    #[test]
    fn pessimistic_expands_to_two_bounds() {
        assert_eq!(
            translate("bar", "~> 1.2.3"),
            vec![">=dev-ruby/bar-1.2.3", "<dev-ruby/bar-1.3"]
        );
        assert_eq!(
            translate("bar", "~> 2.0"),
            vec![">=dev-ruby/bar-2.0", "<dev-ruby/bar-3"]
        );
    }

    #[test]
    fn zero_version_is_bare_atom() {
        assert_eq!(translate("rake", ">= 0"), vec!["dev-ruby/rake"]);
        assert_eq!(translate("rake", "~> 0"), vec!["dev-ruby/rake"]);
    }

    #[test]
    fn other_operators_pass_through() {
        assert_eq!(translate("a", ">= 2.0"), vec![">=dev-ruby/a-2.0"]);
        assert_eq!(translate("a", "<= 2.0"), vec!["<=dev-ruby/a-2.0"]);
        assert_eq!(translate("a", "= 2.0"), vec!["=dev-ruby/a-2.0"]);
        assert_eq!(translate("a", "!= 2.0"), vec!["!=dev-ruby/a-2.0"]);
        assert_eq!(translate("a", "> 2.0"), vec![">dev-ruby/a-2.0"]);
        assert_eq!(translate("a", "< 2.0"), vec!["<dev-ruby/a-2.0"]);
    }

    #[test]
    fn non_numeric_pessimistic_is_fatal() {
        let req = Requirement::parse("odd", "~> 1.beta.2").unwrap();
        let err = translate_requirement("odd", &req).unwrap_err();
        assert!(err.to_string().contains("odd"));
    }

    #[test]
    fn dependency_without_requirements_is_skipped() {
        let deps = vec![Dependency::new("rake", ""), Dependency::new("rack", "= 3.0")];
        assert_eq!(dependency_lines(&deps).unwrap(), vec!["=dev-ruby/rack-3.0"]);
    }

    #[test]
    fn lines_cover_every_requirement() {
        let deps = vec![
            Dependency::new("rack", "~> 2.0, >= 2.0.8"),
            Dependency::new("rake", ">= 0"),
        ];
        assert_eq!(
            dependency_lines(&deps).unwrap(),
            vec![
                ">=dev-ruby/rack-2.0",
                "<dev-ruby/rack-3",
                ">=dev-ruby/rack-2.0.8",
                "dev-ruby/rake",
            ]
        );
    }

    #[test]
    fn clause_joins_with_newline_tab() {
        let deps = vec![Dependency::new("bar", "~> 1.2")];
        assert_eq!(
            rdepend_clause(&deps).unwrap(),
            "ruby_add_rdepend \">=dev-ruby/bar-1.2\n\t<dev-ruby/bar-2\""
        );
    }

    #[test]
    fn empty_list_gives_empty_clause() {
        assert_eq!(rdepend_clause(&[]).unwrap(), "");
        assert_eq!(bdepend_clause(&[]).unwrap(), "");
    }

    #[test]
    fn bdepend_uses_build_directive() {
        let deps = vec![Dependency::new("rspec", "~> 3.0")];
        assert!(bdepend_clause(&deps)
            .unwrap()
            .starts_with("ruby_add_bdepend \""));
    }

    #[test]
    fn malformed_requirement_aborts_clause() {
        let deps = vec![
            Dependency::new("good", ">= 1.0"),
            Dependency::new("bad", "1.0"),
        ];
        assert!(rdepend_clause(&deps).is_err());
    }
}
