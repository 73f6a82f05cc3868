//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for enums
///
/// Underscores in the input are read as spaces, so `"LEFT_TOP"`,
/// `"left top"` and `"Left Top"` all select the same variant.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant one",
///     Variant2 => "variant two"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<Self>().map_err(serde::de::Error::custom)
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().replace('_', " ").as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    )),
                }
            }
        }

        impl std::fmt::Display for $enum_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let s = match self {
                    $(
                        Self::$variant => $str_val,
                    )+
                };
                f.write_str(s)
            }
        }
    };
}
