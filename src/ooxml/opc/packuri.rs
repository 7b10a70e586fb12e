/// The PackURI value type and helpers for package part names.
///
/// A PackURI is an absolute part name inside an OPC package, such as
/// `/ppt/slides/slide1.xml`. It always starts with a forward slash and uses
/// forward slashes as separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a new PackURI, rejecting names without a leading slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relationship target (like `../slideLayouts/slideLayout1.xml`)
    /// against a base URI (like `/ppt/slides`).
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        let joined = if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in joined.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                other => segments.push(other),
            }
        }

        Self::new(format!("/{}", segments.join("/")))
    }

    /// Directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    ///
    /// The package pseudo-partname `/` is its own base.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// File name portion, e.g. `slide1.xml`. Empty for `/`.
    pub fn filename(&self) -> &str {
        self.uri.rsplit_once('/').map(|(_, name)| name).unwrap_or("")
    }

    /// Extension without the leading period, e.g. `xml`.
    pub fn ext(&self) -> &str {
        self.filename()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// ZIP member name: the URI with its leading slash stripped.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Relative reference from `base_uri` to this part, as written in a
    /// relationship `Target` attribute.
    ///
    /// `/ppt/slideLayouts/slideLayout1.xml` seen from `/ppt/slides` is
    /// `../slideLayouts/slideLayout1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = vec![".."; from.len() - common];
        segments.extend_from_slice(&to[common..]);
        segments.join("/")
    }

    /// The `.rels` part that holds this part's relationships,
    /// e.g. `/ppt/_rels/presentation.xml.rels`.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        let rels = if base_uri == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base_uri, self.filename())
        };
        Self::new(rels)
    }

    /// Full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packuri_new() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new("ppt/presentation.xml").is_err());
    }

    #[test]
    fn test_base_uri_and_filename() {
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide1.xml");
        assert_eq!(uri.ext(), "xml");

        let root = PackURI::new("/").unwrap();
        assert_eq!(root.base_uri(), "/");
        assert_eq!(root.filename(), "");
        assert_eq!(root.membername(), "");
    }

    #[test]
    fn test_relative_ref() {
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(
            layout.relative_ref("/ppt/slides"),
            "../slideLayouts/slideLayout1.xml"
        );

        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide.relative_ref("/ppt"), "slides/slide1.xml");
        assert_eq!(slide.relative_ref("/"), "ppt/slides/slide1.xml");
    }

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/ppt/slides", "../slideLayouts/slideLayout1.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/slideLayouts/slideLayout1.xml");

        let uri = PackURI::from_rel_ref("/", "ppt/presentation.xml").unwrap();
        assert_eq!(uri.as_str(), "/ppt/presentation.xml");
    }

    #[test]
    fn test_rels_uri() {
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(
            uri.rels_uri().unwrap().as_str(),
            "/ppt/_rels/presentation.xml.rels"
        );

        let root = PackURI::new(PACKAGE_URI).unwrap();
        assert_eq!(root.rels_uri().unwrap().as_str(), "/_rels/.rels");
    }
}
