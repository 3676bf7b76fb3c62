//! Macros for declaring closed command vocabularies.

/// Generate a closed, fieldless enum whose variants each map to one
/// upper-case keyword.
///
/// The generated type gets `name()`, an `ALL` table in declaration order,
/// `Display` (the keyword) and a case-insensitive `FromStr` whose error is
/// built by the `unknown:` constructor from the rejected text.
///
/// ```ignore
/// vocabulary! {
///     pub enum Light {
///         Red => "RED",
///         Green => "GREEN",
///     }
///     unknown: RobotError::UnknownDirection
/// }
/// ```
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $keyword:literal
            ),* $(,)?
        }

        unknown: $unknown:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $keyword)]
                $variant
            ),*
        }

        impl $name {
            /// Every keyword of the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The upper-case keyword for this value.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::RobotError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $unknown(s.to_string()))
            }
        }
    };
}

pub(crate) use vocabulary;
