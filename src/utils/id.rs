use uuid::Uuid;

/// Opaque question id: `prefix` plus eight hex characters.
pub fn gen_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &hex[..8])
}
