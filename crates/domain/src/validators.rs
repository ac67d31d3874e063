use crate::errors::DomainError;

const MAX_DOMAIN_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

/// Syntactic check of a domain name, run before any cache lookup or network work.
///
/// Rejects names longer than 255 bytes, names with fewer than two labels,
/// empty or over-long labels, labels starting or ending with `-`, and any
/// character outside `[A-Za-z0-9-]` inside a label.
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    labels.iter().all(|label| is_valid_label(label))
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }

    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Validate a queried domain, distinguishing the empty case.
pub fn validate_domain(domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::EmptyDomain);
    }
    if !is_valid_domain(domain) {
        return Err(DomainError::InvalidDomain(domain.to_string()));
    }
    Ok(())
}
