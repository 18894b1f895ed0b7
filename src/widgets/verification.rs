use crate::core::Slug;
use crate::core::value::Value;
use crate::sections::SectionContext;

/// Per-field "confirm this value" affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationControl {
    pub slug: Slug,
    /// Actionable iff a user is signed in, the field has a value and the
    /// record is not mid-edit.
    pub allow_verify: bool,
    pub user_verified: bool,
    pub user_verified_as: Option<String>,
    pub verified_count: u32,
}

impl VerificationControl {
    pub fn for_field(ctx: &SectionContext<'_>, slug: &str) -> Self {
        let value = ctx.building.value(slug);
        Self {
            slug: slug.to_string(),
            allow_verify: ctx.user.is_some() && !value.is_none() && !ctx.edited,
            user_verified: ctx.user_verified.has_verified(slug),
            user_verified_as: ctx
                .user_verified
                .verified_as(slug)
                .and_then(Value::display_text),
            verified_count: ctx.building.verified_count(slug),
        }
    }
}
