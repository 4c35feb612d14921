const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks that `name` is a plausible DNS name.
///
/// This is a shape check only: characters such as `_` (service labels) are
/// allowed, and a single trailing dot marks a fully-qualified name.
pub fn validate_domain_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("name '{}' contains whitespace", name.escape_debug()));
    }
    if name == "." {
        return Ok(());
    }

    let relative = name.strip_suffix('.').unwrap_or(name);
    if relative.len() > MAX_NAME_LEN {
        return Err(format!("name cannot exceed {} characters", MAX_NAME_LEN));
    }
    for label in relative.split('.') {
        if label.is_empty() {
            return Err(format!("name '{}' contains an empty label", name));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            ));
        }
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
