use thiserror::Error;

/// Why a static resource could not be turned into dashboard data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load {resource} ({status})")]
    Status { resource: String, status: u16 },
    #[error("Failed to load {resource}: {message}")]
    Transport { resource: String, message: String },
    #[error("Failed to parse {resource}: {message}")]
    Parse { resource: String, message: String },
}

impl LoadError {
    pub fn status(resource: &str, status: u16) -> Self {
        Self::Status {
            resource: resource.to_string(),
            status,
        }
    }

    pub fn transport(resource: &str, message: impl ToString) -> Self {
        Self::Transport {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    pub fn parse(resource: &str, message: impl ToString) -> Self {
        Self::Parse {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("waypoint {index} is out of range (journey has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_resource_and_code() {
        let error = LoadError::status("labeled.json", 404);

        assert_eq!(error.to_string(), "Failed to load labeled.json (404)");
    }
}
