//! Error types for the rutero library
//!
//! Every failure a request can hit is enumerated here; the HTTP boundary
//! adapter in `server` translates these into status codes, so no handler
//! ever needs a catch-all.

use std::fmt;

/// Which request field a location error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    Origin,
    Destination,
}

impl LocationField {
    /// JSON field name as the client sends it
    pub fn param(&self) -> &'static str {
        match self {
            LocationField::Origin => "origen",
            LocationField::Destination => "destino",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LocationField::Origin => "Origen",
            LocationField::Destination => "Destino",
        }
    }
}

/// Why a coordinate-shaped location string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// Matched the coordinate shape but a component did not parse as a number
    MalformedCoordinate,

    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    CoordinateOutOfRange,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::MalformedCoordinate => {
                write!(f, "Formato de coordenada inválido.")
            }
            LocationError::CoordinateOutOfRange => {
                write!(f, "Coordenadas fuera de rango.")
            }
        }
    }
}

/// Main error type for rutero operations
#[derive(Debug)]
pub enum Error {
    /// Required location field missing or empty after trimming
    MissingLocation(LocationField),

    /// Location string rejected by the coordinate validator
    InvalidLocation {
        field: LocationField,
        reason: LocationError,
    },

    /// Upstream answered but could not produce a route
    RouteUnavailable(String),

    /// Upstream call exceeded the request timeout
    GatewayTimeout,

    /// Transport, decode, or structurally incomplete upstream payload
    Upstream(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingLocation(field) => {
                write!(f, "Se requiere el campo '{}'", field.param())
            }
            Error::InvalidLocation { field, reason } => {
                write!(f, "{} inválido: {}", field.label(), reason)
            }
            Error::RouteUnavailable(msg) => {
                write!(f, "{msg}")
            }
            Error::GatewayTimeout => {
                write!(f, "El servidor de rutas no respondió a tiempo.")
            }
            Error::Upstream(msg) => {
                write!(f, "Ocurrió un error inesperado: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::GatewayTimeout
        } else {
            Error::Upstream(err.to_string())
        }
    }
}

/// Convenience result type for rutero operations
pub type Result<T> = std::result::Result<T, Error>;
