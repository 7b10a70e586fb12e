//! Conversions from layer-specific errors into [`Error`].

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl Error {
    pub(crate) fn from_opc_error(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::Persist { path, source } => Error::Persist { path, source },
            OpcError::XmlError(s) => Error::XmlError(s),
            other => Error::Package(other.to_string()),
        }
    }
}

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        Error::from_opc_error(err)
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from_opc_error(e),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::InvalidFormat(s) => Error::InvalidFormat(s),
            OoxmlError::PartNotFound(s) => Error::Package(format!("part not found: {}", s)),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_error_keeps_path() {
        let opc = OpcError::Persist {
            path: "out.pptx".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let err = Error::from(OoxmlError::Opc(opc));
        assert!(matches!(err, Error::Persist { ref path, .. } if path == "out.pptx"));
        assert!(err.to_string().starts_with("Could not write out.pptx"));
    }

    #[test]
    fn test_zip_error_becomes_package_error() {
        let err = Error::from(OpcError::PartNotFound("/ppt/slides/slide9.xml".to_string()));
        assert!(matches!(err, Error::Package(_)));
    }
}
