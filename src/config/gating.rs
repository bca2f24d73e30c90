use std::env;

/// Route gating mode.
///
/// The deployed system left the role-promotion and class-moderation PATCH
/// routes without any authorization middleware, and clients depend on that
/// behavior. `strict` layers the admin gate onto those routes; it is off
/// unless `STRICT_GATING` is set to `1` or `true`.
#[derive(Clone, Debug, Default)]
pub struct GatingConfig {
    pub strict: bool,
}

impl GatingConfig {
    pub fn from_env() -> Self {
        let strict = env::var("STRICT_GATING")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        Self { strict }
    }
}
