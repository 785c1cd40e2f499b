//! Immutable catalog of zap solver errors.
use core::fmt;

/// Error code of the zap solver.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ZapErrorCode {
    /// Malformed fee or reserve configuration.
    InvalidParameter,
    /// Degenerate deposit request (both amounts zero).
    InvalidAmount,
    /// An intermediate product or sum left its working width.
    ArithmeticOverflow,
    /// The leading coefficient of the quadratic is zero.
    DivisionByZero,
}

impl ZapErrorCode {
    /// Stable textual code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "ZAP-0001",
            Self::InvalidAmount => "ZAP-0002",
            Self::ArithmeticOverflow => "ZAP-0003",
            Self::DivisionByZero => "ZAP-0004",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "Invalid parameter",
            Self::InvalidAmount => "Invalid amount",
            Self::ArithmeticOverflow => "Arithmetic overflow",
            Self::DivisionByZero => "Division by zero",
        }
    }

    /// Base message; may carry `{placeholder}`s filled from the error context.
    pub const fn message_en(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "fee must be below extension and reserves must be > 0",
            Self::InvalidAmount => "at least one deposit amount must be > 0",
            Self::ArithmeticOverflow => "intermediate value out of range at {stage}",
            Self::DivisionByZero => "quadratic coefficient a is zero",
        }
    }

    /// All variants in stable order.
    pub fn all() -> &'static [ZapErrorCode] {
        const ALL: &[ZapErrorCode] = &[
            ZapErrorCode::InvalidParameter,
            ZapErrorCode::InvalidAmount,
            ZapErrorCode::ArithmeticOverflow,
            ZapErrorCode::DivisionByZero,
        ];
        ALL
    }
}

impl fmt::Display for ZapErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message in the active locale (en).
pub fn default_locale_message(code: ZapErrorCode) -> &'static str {
    code.message_en()
}
