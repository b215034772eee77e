/// Android manifest component extraction
///
/// This module handles:
/// - Streaming an AndroidManifest.xml with quick-xml
/// - Collecting the activity/service/receiver/provider declarations of
///   every top-level `application` element
/// - Writing the `<kind>: <name>` listing
use crate::error::{ConsolidateError, Result};
use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Namespace URI of the `android:` attributes.
pub const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

/// Default listing file name.
pub const COMPONENTS_FILE: &str = "components.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Activity,
    Service,
    Receiver,
    Provider,
}

impl ComponentKind {
    /// All kinds, in listing order.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Activity,
        ComponentKind::Service,
        ComponentKind::Receiver,
        ComponentKind::Provider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Activity => "activity",
            ComponentKind::Service => "service",
            ComponentKind::Receiver => "receiver",
            ComponentKind::Provider => "provider",
        }
    }

    fn from_tag(tag: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str().as_bytes() == tag)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    pub name: String,
}

/// Everything extracted from one manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestComponents {
    /// `package` attribute of the root element
    pub package: Option<String>,
    /// Components in document order
    pub components: Vec<Component>,
}

impl ManifestComponents {
    /// Names of the components of `kind`, in document order.
    pub fn names(&self, kind: ComponentKind) -> Vec<&str> {
        self.components.iter().filter(|c| c.kind == kind).map(|c| c.name.as_str()).collect()
    }

    /// `<kind>: <name>` lines, grouped by kind in listing order.
    pub fn lines(&self) -> Vec<String> {
        ComponentKind::ALL
            .iter()
            .flat_map(|kind| self.names(*kind).into_iter().map(move |name| format!("{}: {}", kind, name)))
            .collect()
    }
}

/// Extract the components declared in a manifest document.
pub fn extract_components(xml: &str) -> std::result::Result<ManifestComponents, String> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut name_key = b"android:name".to_vec();
    let mut seen_root = false;
    let mut manifest = ManifestComponents::default();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("XML error at position {}: {}", reader.buffer_position(), e))?;

        match event {
            Event::Start(ref tag) | Event::Empty(ref tag) => {
                if stack.is_empty() {
                    if seen_root {
                        return Err("multiple root elements".to_string());
                    }
                    seen_root = true;
                    manifest.package = attribute_value(tag, b"package");
                    if let Some(prefix) = android_prefix(tag) {
                        name_key = format!("{}:name", prefix).into_bytes();
                    }
                } else if is_component_parent(&stack) {
                    collect_component(tag, &name_key, &mut manifest);
                }

                if matches!(event, Event::Start(_)) {
                    stack.push(tag.local_name().as_ref().to_vec());
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err("no root element".to_string());
    }

    debug!("Extracted {} components from package {:?}", manifest.components.len(), manifest.package);
    Ok(manifest)
}

/// Components live directly under `<root>/<application>`.
fn is_component_parent(stack: &[Vec<u8>]) -> bool {
    stack.len() == 2 && stack[1] == b"application"
}

fn collect_component(tag: &BytesStart<'_>, name_key: &[u8], manifest: &mut ManifestComponents) {
    let Some(kind) = ComponentKind::from_tag(tag.local_name().as_ref()) else {
        return;
    };

    match attribute_value(tag, name_key) {
        Some(name) => manifest.components.push(Component { kind, name }),
        None => warn!("Skipping {} without a name attribute", kind),
    }
}

/// Prefix the root binds to the android namespace, if any.
fn android_prefix(tag: &BytesStart<'_>) -> Option<String> {
    tag.attributes().with_checks(false).flatten().find_map(|attr| {
        let key = attr.key.as_ref();
        let prefix = key.strip_prefix(b"xmlns:")?;
        let value = attr.unescape_value().ok()?;
        (value == ANDROID_NAMESPACE).then(|| String::from_utf8_lossy(prefix).into_owned())
    })
}

fn attribute_value(tag: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    tag.attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.as_ref() == name)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

/// Read and extract the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<ManifestComponents> {
    let xml = fs::read_to_string(path).map_err(|e| ConsolidateError::io(path, e))?;
    extract_components(&xml).map_err(|reason| ConsolidateError::Manifest {
        path: path.to_path_buf(),
        reason,
    })
}

/// Write the component listing, one `<kind>: <name>` per line.
pub fn write_components(manifest: &ManifestComponents, path: &Path) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| ConsolidateError::io(path, e))?;
    for line in manifest.lines() {
        writeln!(file, "{}", line).map_err(|e| ConsolidateError::io(path, e))?;
    }
    Ok(())
}
