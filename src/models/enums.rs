use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for wire strings that do not name a known enum member.
#[derive(Debug, Error)]
#[error("Unknown {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(DocumentKind {
    Kk => "kk",
    Akta => "akta",
    SuratPengantar => "surat_pengantar",
});

impl DocumentKind {
    /// Fixed enumeration order. `missing`, `validation` and `drive_links`
    /// are always emitted in this order, independent of input order.
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Kk,
        DocumentKind::Akta,
        DocumentKind::SuratPengantar,
    ];
}

str_enum!(Mode {
    Ktp => "ktp",
    Tanya => "tanya",
});
