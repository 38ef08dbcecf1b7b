//! Builder macro for reducing boilerplate in configuration builders.

/// Generate a builder struct and implementation for a configuration type.
///
/// The configuration type must implement `Default` and provide
/// `fn validate(self) -> Result<Self, ConfigError>`. The macro generates:
/// - A builder struct with all fields wrapped in `Option`, deserializable
///   from a partial JSON object
/// - Setter methods for each field (all accept `impl Into<T>`)
/// - A `build()` method that checks required fields, fills defaults and
///   runs the config's validation
/// - A `builder()` method on the config type
/// - `TryFrom<Builder>` for the config type, so `#[serde(try_from)]` can
///   route deserialization through the same checks
///
/// # Field categories
///
/// - `required { field: Type }` — `build()` returns an error if not set
/// - `optional { field: Type }` — uses `unwrap_or(defaults.field)` for non-Option fields
/// - `optional_or { field: Type }` — uses `.or(defaults.field)` for `Option<T>` config fields
///
/// Note: For `usize` fields, callers must use suffixed literals (e.g., `10usize`)
/// because `i32 -> usize` has no `Into` impl.
macro_rules! impl_builder {
    (
        $Config:ident, $Builder:ident {
            required { $( $req_field:ident : $req_ty:ty ),* $(,)? }
            optional { $( $opt_field:ident : $opt_ty:ty ),* $(,)? }
            optional_or { $( $optor_field:ident : $optor_ty:ty ),* $(,)? }
        }
    ) => {
        #[derive(Debug, Clone, Default, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $Builder {
            $( $req_field: Option<$req_ty>, )*
            $( $opt_field: Option<$opt_ty>, )*
            $( $optor_field: Option<$optor_ty>, )*
        }

        impl $Config {
            pub fn builder() -> $Builder {
                $Builder::default()
            }
        }

        impl $Builder {
            $(
                pub fn $req_field(mut self, value: impl Into<$req_ty>) -> Self {
                    self.$req_field = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt_field = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $optor_field(mut self, value: impl Into<$optor_ty>) -> Self {
                    self.$optor_field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> Result<$Config, $crate::error::ConfigError> {
                let defaults = $Config::default();
                $(
                    let $req_field = self.$req_field.ok_or($crate::error::ConfigError::MissingRequiredField {
                        builder: stringify!($Builder),
                        field: stringify!($req_field),
                    })?;
                )*
                $Config {
                    $( $req_field, )*
                    $( $opt_field: self.$opt_field.unwrap_or(defaults.$opt_field), )*
                    $( $optor_field: self.$optor_field.or(defaults.$optor_field), )*
                }
                .validate()
            }
        }

        impl TryFrom<$Builder> for $Config {
            type Error = $crate::error::ConfigError;

            fn try_from(builder: $Builder) -> Result<Self, Self::Error> {
                builder.build()
            }
        }
    };
}

pub(crate) use impl_builder;
