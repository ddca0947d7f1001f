//! SearchParameter Registry.
//!
//! The registry holds the search parameters each resource type supports,
//! indexed by (resource_type, param_code). Anything not registered is
//! ignored by search.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ResourceType;

use super::errors::RegistryError;
use super::predicates;

/// FHIR search parameter types used by the registered parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchParamType {
    /// Free text (names).
    String,
    /// A code, or a plain code-like string.
    Token,
    /// A date or dateTime.
    Date,
    /// A reference to another resource.
    Reference,
}

impl fmt::Display for SearchParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchParamType::String => "string",
            SearchParamType::Token => "token",
            SearchParamType::Date => "date",
            SearchParamType::Reference => "reference",
        };
        write!(f, "{}", s)
    }
}

/// How a parameter value is tested against a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Case-insensitive substring of any given name or family name.
    HumanName {
        /// Path to the HumanName element(s).
        path: Vec<&'static str>,
    },
    /// Exact string equality.
    Exact {
        /// Path to the string element.
        path: Vec<&'static str>,
    },
    /// Exact equality with any `coding[].code` of a CodeableConcept.
    Coding {
        /// Path to the CodeableConcept element(s).
        path: Vec<&'static str>,
    },
    /// Reference equals `"<target>/<value>"`.
    Reference {
        /// Path to the Reference element.
        path: Vec<&'static str>,
        /// The referenced resource type.
        target: ResourceType,
    },
    /// The stored timestamp starts with the supplied value.
    DatePrefix {
        /// Path to the date element.
        path: Vec<&'static str>,
    },
}

impl Matcher {
    /// Tests `resource` against a single raw query value.
    pub fn matches(&self, resource: &Value, value: &str) -> bool {
        match self {
            Matcher::HumanName { path } => predicates::human_name_contains(resource, path, value),
            Matcher::Exact { path } => predicates::exact_equals(resource, path, value),
            Matcher::Coding { path } => predicates::coding_code_equals(resource, path, value),
            Matcher::Reference { path, target } => {
                predicates::reference_equals(resource, path, target.as_str(), value)
            }
            Matcher::DatePrefix { path } => predicates::date_has_prefix(resource, path, value),
        }
    }
}

/// Definition of one supported search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameterDefinition {
    /// Parameter code (the URL param name, e.g. `name`, `clinical-status`).
    pub code: String,

    /// The parameter type.
    pub param_type: SearchParamType,

    /// The resource type this parameter applies to.
    pub base: ResourceType,

    /// The matching rule.
    pub matcher: Matcher,
}

impl SearchParameterDefinition {
    /// Creates a new definition.
    pub fn new(
        base: ResourceType,
        code: impl Into<String>,
        param_type: SearchParamType,
        matcher: Matcher,
    ) -> Self {
        Self {
            code: code.into(),
            param_type,
            base,
            matcher,
        }
    }

    /// Tests `resource` against a single raw query value.
    pub fn matches(&self, resource: &Value, value: &str) -> bool {
        self.matcher.matches(resource, value)
    }
}

/// In-memory registry of search parameter definitions.
#[derive(Debug, Clone, Default)]
pub struct SearchParameterRegistry {
    params_by_type: HashMap<ResourceType, HashMap<String, Arc<SearchParameterDefinition>>>,
}

impl SearchParameterRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the standard parameters.
    ///
    /// | Type | Code | Rule |
    /// |---|---|---|
    /// | Patient | `name` | substring of `name[].given[]` / `name[].family`, case-insensitive |
    /// | Patient | `birthdate` | `birthDate` equals |
    /// | Patient | `gender` | `gender` equals |
    /// | Observation | `patient` | `subject` is `Patient/<v>` |
    /// | Observation | `category` | any `category[].coding[].code` equals |
    /// | Observation | `date` | `effectiveDateTime` starts with |
    /// | Observation | `code` | any `code.coding[].code` equals |
    /// | Condition | `patient` | `subject` is `Patient/<v>` |
    /// | Condition | `clinical-status` | any `clinicalStatus.coding[].code` equals |
    /// | Condition | `onset-date` | `onsetDateTime` starts with |
    /// | every type | `_id` | `id` equals |
    pub fn standard() -> Self {
        use Matcher::*;
        use ResourceType::*;
        use SearchParamType as T;

        let subject = || Reference {
            path: vec!["subject"],
            target: Patient,
        };

        let mut params = vec![
            SearchParameterDefinition::new(Patient, "name", T::String, HumanName { path: vec!["name"] }),
            SearchParameterDefinition::new(Patient, "birthdate", T::Date, Exact { path: vec!["birthDate"] }),
            SearchParameterDefinition::new(Patient, "gender", T::Token, Exact { path: vec!["gender"] }),
            SearchParameterDefinition::new(Observation, "patient", T::Reference, subject()),
            SearchParameterDefinition::new(Observation, "category", T::Token, Coding { path: vec!["category"] }),
            SearchParameterDefinition::new(Observation, "date", T::Date, DatePrefix { path: vec!["effectiveDateTime"] }),
            SearchParameterDefinition::new(Observation, "code", T::Token, Coding { path: vec!["code"] }),
            SearchParameterDefinition::new(Condition, "patient", T::Reference, subject()),
            SearchParameterDefinition::new(Condition, "clinical-status", T::Token, Coding { path: vec!["clinicalStatus"] }),
            SearchParameterDefinition::new(Condition, "onset-date", T::Date, DatePrefix { path: vec!["onsetDateTime"] }),
        ];
        params.extend(
            ResourceType::ALL
                .iter()
                .map(|t| SearchParameterDefinition::new(*t, "_id", T::Token, Exact { path: vec!["id"] })),
        );

        let mut registry = Self::new();
        for param in params {
            registry.register_internal(param);
        }
        registry
    }

    /// Returns the number of registered parameters.
    pub fn len(&self) -> usize {
        self.params_by_type.values().map(HashMap::len).sum()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a specific parameter by resource type and code.
    pub fn get_param(
        &self,
        resource_type: ResourceType,
        code: &str,
    ) -> Option<Arc<SearchParameterDefinition>> {
        self.params_by_type
            .get(&resource_type)
            .and_then(|params| params.get(code))
            .cloned()
    }

    /// Registers a new parameter.
    pub fn register(&mut self, param: SearchParameterDefinition) -> Result<(), RegistryError> {
        if self.get_param(param.base, &param.code).is_some() {
            return Err(RegistryError::Duplicate {
                resource_type: param.base,
                code: param.code,
            });
        }
        self.register_internal(param);
        Ok(())
    }

    fn register_internal(&mut self, param: SearchParameterDefinition) {
        self.params_by_type
            .entry(param.base)
            .or_default()
            .insert(param.code.clone(), Arc::new(param));
    }
}
