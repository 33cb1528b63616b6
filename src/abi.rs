//! C++ standard library ABIs the modern ordering types can be bit-compatible with.
//!
//! The C++ standard leaves the representation of `std::partial_ordering::unordered`
//! to the implementation, and the three major standard libraries chose different
//! values. The build script selects one of them for the current target and
//! passes it in the `qt_compare_stdlib` cfg.

use crate::errors::UnknownStdLib;
use crate::tag::CompareUnderlyingType;
use crate::target;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// C++ standard library implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StdLib {
    /// LLVM's libc++.
    LibCxx,
    /// GNU libstdc++.
    LibStdCxx,
    /// Microsoft STL.
    MsStl,
}

impl StdLib {
    /// All supported implementations.
    pub const ALL: [StdLib; 3] = [StdLib::LibCxx, StdLib::LibStdCxx, StdLib::MsStl];

    /// Implementation selected for the current target by the build script.
    #[cfg(qt_compare_stdlib = "libcxx")]
    pub const CURRENT: StdLib = StdLib::LibCxx;
    /// Implementation selected for the current target by the build script.
    #[cfg(qt_compare_stdlib = "msstl")]
    pub const CURRENT: StdLib = StdLib::MsStl;
    /// Implementation selected for the current target by the build script.
    #[cfg(not(any(qt_compare_stdlib = "libcxx", qt_compare_stdlib = "msstl")))]
    pub const CURRENT: StdLib = StdLib::LibStdCxx;

    /// Implementation the build script picks for a target when
    /// `QT_COMPARE_CXX_STDLIB` is not set. The arguments are the values of
    /// `cfg(target_os)` and `cfg(target_env)`.
    pub fn for_target(target_os: &str, target_env: &str) -> StdLib {
        StdLib::from_cfg(target::default_stdlib_cfg(target_os, target_env))
    }

    fn from_cfg(cfg: &str) -> StdLib {
        match cfg {
            "libcxx" => StdLib::LibCxx,
            "msstl" => StdLib::MsStl,
            _ => StdLib::LibStdCxx,
        }
    }

    /// Bit pattern of `std::partial_ordering::unordered` in this implementation.
    pub const fn unordered_tag(self) -> CompareUnderlyingType {
        match self {
            StdLib::LibCxx => -127,
            StdLib::LibStdCxx => 2,
            StdLib::MsStl => -128,
        }
    }

    /// Name accepted by `from_str` and by the `QT_COMPARE_CXX_STDLIB` variable.
    pub fn name(self) -> &'static str {
        match self {
            StdLib::LibCxx => "libc++",
            StdLib::LibStdCxx => "libstdc++",
            StdLib::MsStl => "msstl",
        }
    }
}

impl fmt::Display for StdLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StdLib {
    type Err = UnknownStdLib;

    fn from_str(s: &str) -> Result<StdLib, UnknownStdLib> {
        match target::parse_stdlib_cfg(s) {
            Some(cfg) => Ok(StdLib::from_cfg(cfg)),
            None => Err(UnknownStdLib {
                name: s.to_string(),
            }),
        }
    }
}
