//! Catalogue schemas with trimmed class tables.
//!
//! The axis and default layout mirrors the real button, card and badge
//! components; each value carries a short marker class so assertions stay
//! readable.

use strata_variants::{Axis, CompoundRule, SchemaResult, VariantSchema};

/// Button: `variant` × `size`, no compound rules.
///
/// # Errors
///
/// Never in practice; the table is statically valid.
pub fn button_schema() -> SchemaResult<VariantSchema> {
    VariantSchema::builder("button")
        .base("inline-flex items-center font-semibold")
        .axis(
            Axis::new("variant")
                .value("default", "bg-primary shadow-sm")
                .value("primary", "bg-primary shadow-primary/40")
                .value("outline", "border-2 bg-transparent")
                .value("ghost", "bg-transparent shadow-sm")
                .value("glass", "bg-white/10 backdrop-blur-xl")
                .with_default("default"),
        )
        .axis(
            Axis::new("size")
                .value("sm", "h-9 px-4 text-sm rounded-xl")
                .value("md", "h-11 px-6 text-base rounded-xl")
                .value("lg", "h-13 px-8 text-lg rounded-2xl")
                .value("icon", "h-10 w-10 p-0 rounded-xl")
                .with_default("md"),
        )
        .build()
}

/// Card: `variant` × `padding` × `rounded` × `hoverable`, with glow
/// compounds for hoverable glass and bordered cards.
///
/// # Errors
///
/// Never in practice; the table is statically valid.
pub fn card_schema() -> SchemaResult<VariantSchema> {
    VariantSchema::builder("card")
        .base("relative overflow-hidden transition-all")
        .axis(
            Axis::new("variant")
                .value("default", "bg-card/95 border")
                .value("glass", "bg-white/10 backdrop-blur-xl")
                .value("glass-strong", "bg-white/15 backdrop-blur-2xl")
                .value("bordered", "bg-card/90 border-2")
                .with_default("default"),
        )
        .axis(
            Axis::new("padding")
                .value("none", "")
                .value("sm", "p-3")
                .value("md", "p-4")
                .value("lg", "p-6")
                .with_default("md"),
        )
        .axis(
            Axis::new("rounded")
                .value("md", "rounded-md")
                .value("lg", "rounded-lg")
                .value("xl", "rounded-xl")
                .with_default("lg"),
        )
        .axis(
            Axis::flag("hoverable", "cursor-pointer hover:-translate-y-1", "")
                .with_default(false),
        )
        .compound(
            CompoundRule::new("hover:shadow-primary/30")
                .when("variant", "glass")
                .when("hoverable", true),
        )
        .compound(
            CompoundRule::new("hover:shadow-primary/40 hover:border-primary/30")
                .when("variant", "glass-strong")
                .when("hoverable", true),
        )
        .compound(
            CompoundRule::new("hover:border-primary/60")
                .when("variant", "bordered")
                .when("hoverable", true),
        )
        .build()
}

/// Badge: `variant` × `size` × `shape`; shapes override the size rounding.
///
/// # Errors
///
/// Never in practice; the table is statically valid.
pub fn badge_schema() -> SchemaResult<VariantSchema> {
    VariantSchema::builder("badge")
        .base("inline-flex items-center font-medium")
        .axis(
            Axis::new("variant")
                .value("default", "bg-gray-100 text-gray-800")
                .value("success", "bg-green-500 text-white")
                .value("error", "bg-red-500 text-white")
                .with_default("default"),
        )
        .axis(
            Axis::new("size")
                .value("sm", "text-xs px-2 rounded-md")
                .value("md", "text-sm px-2.5 rounded-lg")
                .value("lg", "text-base px-3 rounded-lg")
                .with_default("md"),
        )
        .axis(
            Axis::new("shape")
                .value("rounded", "")
                .value("pill", "!rounded-full")
                .value("square", "!rounded-none")
                .with_default("rounded"),
        )
        .build()
}
