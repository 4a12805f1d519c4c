use std::collections::HashSet;

use crate::models::metadata::{
    Action, ActionParam, ChainContext, DynamicAction, Metadata, ParamType, ValidatedMetadata,
};

pub const APP_URL: &str = "https://sherry.social";
pub const APP_ICON: &str = "https://avatars.githubusercontent.com/u/117962315";
pub const APP_TITLE: &str = "Review our Restaurant";
pub const APP_DESCRIPTION: &str =
    "Submit your feedback and ratings for our restaurant directly on the blockchain.";

/// Path the platform posts form submissions to
pub const FEEDBACK_ACTION_PATH: &str = "/api/rating-app";

pub const MAX_ACTIONS: usize = 4;
pub const SUPPORTED_CHAINS: &[&str] = &["fuji", "avalanche", "celo", "alfajores", "monad-testnet"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("expected between 1 and 4 actions, got {0}")]
    ActionCount(usize),

    #[error("action path must start with '/', got {0:?}")]
    InvalidPath(String),

    #[error("unsupported chain {0:?}")]
    UnsupportedChain(String),

    #[error("duplicate parameter name {0:?}")]
    DuplicateParam(String),

    #[error("parameter {name:?} has min {min} greater than max {max}")]
    InvalidBounds { name: String, min: i64, max: i64 },
}

/// Manifest for the restaurant rating mini-app, served from `base_url`
pub fn rating_app_metadata(base_url: &str) -> Metadata {
    Metadata {
        url: APP_URL.to_string(),
        icon: APP_ICON.to_string(),
        title: APP_TITLE.to_string(),
        base_url: Some(base_url.to_string()),
        description: APP_DESCRIPTION.to_string(),
        actions: vec![Action::Dynamic(DynamicAction {
            label: "Restaurant Feedback".to_string(),
            description: Some("Share your thoughts and ratings".to_string()),
            chains: ChainContext {
                source: "fuji".to_string(),
                destination: None,
            },
            path: FEEDBACK_ACTION_PATH.to_string(),
            params: vec![
                ActionParam {
                    name: "Your Feedback".to_string(),
                    label: "Feedback!".to_string(),
                    param_type: ParamType::Textarea,
                    required: true,
                    description: Some(
                        "Enter the feedback you want to store on the blockchain".to_string(),
                    ),
                    min: None,
                    max: None,
                },
                ActionParam {
                    name: "Rating".to_string(),
                    label: "Give your ratings (Between 1 and 5)".to_string(),
                    param_type: ParamType::Number,
                    required: true,
                    description: Some(
                        "Enter the rating you want to store on the blockchain".to_string(),
                    ),
                    min: Some(1),
                    max: Some(5),
                },
            ],
        })],
    }
}

/// Validate a manifest and normalize its free-text fields.
pub fn create_metadata(metadata: Metadata) -> Result<ValidatedMetadata, MetadataError> {
    let Metadata {
        url,
        icon,
        title,
        base_url,
        description,
        actions,
    } = metadata;

    let normalized = Metadata {
        url: absolute_url("url", url)?,
        icon: absolute_url("icon", icon)?,
        title: non_empty("title", title)?,
        base_url: base_url.map(|u| absolute_url("baseUrl", u)).transpose()?,
        description: non_empty("description", description)?,
        actions: validate_actions(actions)?,
    };

    Ok(ValidatedMetadata::new(normalized))
}

fn validate_actions(actions: Vec<Action>) -> Result<Vec<Action>, MetadataError> {
    if actions.is_empty() || actions.len() > MAX_ACTIONS {
        return Err(MetadataError::ActionCount(actions.len()));
    }

    actions
        .into_iter()
        .map(|action| match action {
            Action::Dynamic(dynamic) => validate_dynamic(dynamic).map(Action::Dynamic),
        })
        .collect()
}

fn validate_dynamic(action: DynamicAction) -> Result<DynamicAction, MetadataError> {
    let path = action.path.trim().to_string();
    if !path.starts_with('/') {
        return Err(MetadataError::InvalidPath(path));
    }

    Ok(DynamicAction {
        label: non_empty("action label", action.label)?,
        description: action.description.map(|d| d.trim().to_string()),
        chains: validate_chains(action.chains)?,
        path,
        params: validate_params(action.params)?,
    })
}

fn validate_chains(chains: ChainContext) -> Result<ChainContext, MetadataError> {
    let source = supported_chain(chains.source)?;
    let destination = chains.destination.map(supported_chain).transpose()?;

    Ok(ChainContext { source, destination })
}

fn supported_chain(chain: String) -> Result<String, MetadataError> {
    let chain = chain.trim().to_lowercase();
    if SUPPORTED_CHAINS.contains(&chain.as_str()) {
        Ok(chain)
    } else {
        Err(MetadataError::UnsupportedChain(chain))
    }
}

fn validate_params(params: Vec<ActionParam>) -> Result<Vec<ActionParam>, MetadataError> {
    let mut seen = HashSet::new();

    params
        .into_iter()
        .map(|param| {
            let name = non_empty("parameter name", param.name)?;
            if !seen.insert(name.clone()) {
                return Err(MetadataError::DuplicateParam(name));
            }

            if let (Some(min), Some(max)) = (param.min, param.max) {
                if min > max {
                    return Err(MetadataError::InvalidBounds { name, min, max });
                }
            }

            Ok(ActionParam {
                name,
                label: non_empty("parameter label", param.label)?,
                description: param.description.map(|d| d.trim().to_string()),
                ..param
            })
        })
        .collect()
}

fn non_empty(field: &'static str, value: String) -> Result<String, MetadataError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MetadataError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn absolute_url(field: &'static str, value: String) -> Result<String, MetadataError> {
    let trimmed = value.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(trimmed.to_string()),
        _ => Err(MetadataError::InvalidUrl {
            field,
            value: value.clone(),
        }),
    }
}
