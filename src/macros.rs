/// Declare a free-spacing (`x` flag) rule for the built-in rule sets.
///
/// Expands to `Result<Rule>`; see `rules::compile` for how built-ins unwrap it.
macro_rules! rule {
    (
        label: $label:expr,
        description: $desc:expr,
        pattern: $pat:expr
        $(, defaults: { $($field:ident => $value:expr),* $(,)? })?
        $(, explicit: $explicit:expr)?
        $(, weight: $weight:expr)?
        $(,)?
    ) => {{
        $crate::Rule::builder($label, $pat)
            .description($desc)
            .verbose(true)
            $($(.default($crate::Field::$field, $value))*)?
            $(.explicit($explicit))?
            $(.weight($weight))?
            .build()
    }};
}
