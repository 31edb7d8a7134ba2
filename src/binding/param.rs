//! Parameter descriptors.

use std::fmt;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::binding::error::Error;

/// A conversion function from a raw string to a bound value.
pub type Converter = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// The declared target type of a parameter.
#[derive(Clone)]
pub enum ParamType {
    /// Keep the string as is.
    Str,
    /// A signed 64-bit integer.
    Int,
    /// A finite 64-bit float.
    Float,
    /// `true` or `false`.
    Bool,
    /// A user-supplied conversion.
    Custom {
        /// Name used in error messages.
        name: String,
        /// The conversion function.
        convert: Converter,
    },
}

impl ParamType {
    /// Declare a custom conversion.
    pub fn custom<F>(name: impl Into<String>, convert: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        ParamType::Custom {
            name: name.into(),
            convert: Arc::new(convert),
        }
    }

    /// The type name.
    pub fn name(&self) -> &str {
        match self {
            ParamType::Str => "str",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Bool => "bool",
            ParamType::Custom { name, .. } => name,
        }
    }

    /// Convert a raw string to this type.
    pub fn convert(&self, raw: &str) -> Result<Value, String> {
        match self {
            ParamType::Str => Ok(Value::String(raw.to_string())),
            ParamType::Int => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| e.to_string()),
            ParamType::Float => {
                let number = raw.parse::<f64>().map_err(|e| e.to_string())?;
                Number::from_f64(number)
                    .map(Value::Number)
                    .ok_or_else(|| "not a finite number".to_string())
            }
            ParamType::Bool => raw
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|e| e.to_string()),
            ParamType::Custom { convert, .. } => convert(raw),
        }
    }
}

impl fmt::Debug for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParamType({})", self.name())
    }
}

/// A declared handler parameter.
///
/// Without a type the raw string is passed through. A context parameter always
/// receives the live request context.
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    ty: Option<ParamType>,
    default: Option<Value>,
    wants_context: bool,
}

impl Param {
    /// An untyped parameter with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            wants_context: false,
        }
    }

    /// A parameter that receives the request context itself.
    pub fn context(name: impl Into<String>) -> Self {
        Self {
            wants_context: true,
            ..Self::new(name)
        }
    }

    /// Declare the target type.
    pub fn typed(mut self, ty: ParamType) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Declare a default, used unconverted when nothing else supplies a value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type, if any.
    pub fn ty(&self) -> Option<&ParamType> {
        self.ty.as_ref()
    }

    /// The declared default, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether this parameter receives the request context.
    pub fn wants_context(&self) -> bool {
        self.wants_context
    }

    /// Apply the declared type to a raw string.
    pub(crate) fn convert(&self, raw: &str) -> Result<Value, Error> {
        let Some(ty) = &self.ty else {
            return Ok(Value::String(raw.to_string()));
        };

        ty.convert(raw).map_err(|reason| Error::Conversion {
            name: self.name.clone(),
            value: raw.to_string(),
            target: ty.name().to_string(),
            reason,
        })
    }
}
