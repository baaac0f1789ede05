//! hidraw discovery and output
//!
//! Discovery reads `<sysfs>/class/hidraw/hidrawN/device/uevent`, which
//! carries the bus/vendor/product triple and product name:
//!
//! ```text
//! HID_ID=0003:000027BB:00003BCE
//! HID_NAME=Vendor RGB Controller
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;
use lumen_hal::{DeviceId, ReportDevice, ReportSink};

use crate::error::DeviceError;
use crate::tasks::keepalive::Opener;

/// One hidraw node found in sysfs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HidrawNode {
    /// Node name, e.g. `hidraw3`
    pub name: String,
    pub device_id: DeviceId,
    pub product_name: Option<String>,
    /// Character device to write to
    pub dev_path: PathBuf,
}

/// Extract the device identity and product name from a hidraw uevent file
pub fn parse_uevent(contents: &str) -> Option<(DeviceId, Option<String>)> {
    let mut device_id = None;
    let mut product_name = None;

    for line in contents.lines() {
        if let Some(value) = line.strip_prefix("HID_ID=") {
            // bus:vendor:product, each zero-padded hex
            let mut fields = value.trim().split(':');
            let _bus = fields.next()?;
            let vendor = u32::from_str_radix(fields.next()?, 16).ok()?;
            let product = u32::from_str_radix(fields.next()?, 16).ok()?;
            device_id = Some(DeviceId::new(
                u16::try_from(vendor).ok()?,
                u16::try_from(product).ok()?,
            ));
        } else if let Some(value) = line.strip_prefix("HID_NAME=") {
            let value = value.trim();
            if !value.is_empty() {
                product_name = Some(value.to_string());
            }
        }
    }

    device_id.map(|id| (id, product_name))
}

/// Finds hidraw nodes by vendor/product
#[derive(Debug, Clone)]
pub struct HidrawScanner {
    sysfs_root: PathBuf,
    dev_root: PathBuf,
}

impl HidrawScanner {
    /// Scanner for the running system (`/sys`, `/dev`)
    pub fn system() -> Self {
        Self::with_roots("/sys", "/dev")
    }

    /// Scanner over an alternative sysfs and dev tree
    pub fn with_roots(sysfs_root: impl Into<PathBuf>, dev_root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
            dev_root: dev_root.into(),
        }
    }

    /// List every hidraw node, lowest index first
    ///
    /// Nodes whose uevent cannot be read or parsed are skipped.
    pub fn scan(&self) -> Result<Vec<HidrawNode>, DeviceError> {
        let class_dir = self.sysfs_root.join("class").join("hidraw");
        let entries = match fs::read_dir(&class_dir) {
            Ok(entries) => entries,
            // No hidraw driver loaded means no devices
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(DeviceError::Io {
                    path: class_dir,
                    source,
                })
            }
        };

        let mut nodes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DeviceError::Io {
                path: class_dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let uevent_path = entry.path().join("device").join("uevent");

            let Ok(contents) = fs::read_to_string(&uevent_path) else {
                debug!("Skipping {}: unreadable uevent", name);
                continue;
            };
            let Some((device_id, product_name)) = parse_uevent(&contents) else {
                debug!("Skipping {}: no HID_ID in uevent", name);
                continue;
            };

            nodes.push(HidrawNode {
                dev_path: self.dev_root.join(&name),
                name,
                device_id,
                product_name,
            });
        }

        nodes.sort_by_key(|node| node_index(&node.name));
        Ok(nodes)
    }

    /// First node matching `id`
    pub fn find(&self, id: DeviceId) -> Result<HidrawNode, DeviceError> {
        self.scan()?
            .into_iter()
            .find(|node| node.device_id == id)
            .ok_or(DeviceError::NotFound(id))
    }

    /// Find and open the first node matching `id`
    pub fn open(&self, id: DeviceId) -> Result<HidrawDevice, DeviceError> {
        HidrawDevice::open(self.find(id)?)
    }
}

/// Numeric suffix of `hidrawN`, so `hidraw10` sorts after `hidraw2`
fn node_index(name: &str) -> (u32, String) {
    let index = name
        .trim_start_matches("hidraw")
        .parse()
        .unwrap_or(u32::MAX);
    (index, name.to_string())
}

/// An opened hidraw node
#[derive(Debug)]
pub struct HidrawDevice {
    file: File,
    node: HidrawNode,
}

impl HidrawDevice {
    /// Open a node for writing
    pub fn open(node: HidrawNode) -> Result<Self, DeviceError> {
        let file = OpenOptions::new()
            .write(true)
            .open(&node.dev_path)
            .map_err(|source| DeviceError::Io {
                path: node.dev_path.clone(),
                source,
            })?;
        debug!("Opened {}", node.dev_path.display());
        Ok(Self { file, node })
    }
}

impl ReportSink for HidrawDevice {
    type Error = io::Error;

    fn write_report(&mut self, report: &[u8]) -> Result<usize, io::Error> {
        // hidraw takes one report per write() call
        self.file.write(report)
    }
}

impl ReportDevice for HidrawDevice {
    fn device_id(&self) -> DeviceId {
        self.node.device_id
    }

    fn product_name(&self) -> Option<&str> {
        self.node.product_name.as_deref()
    }
}

/// Opens the controller, rescanning sysfs after the link is lost
#[derive(Debug, Clone)]
pub struct HidrawOpener {
    scanner: HidrawScanner,
    id: DeviceId,
    found: Option<HidrawNode>,
}

impl HidrawOpener {
    pub fn new(scanner: HidrawScanner, id: DeviceId) -> Self {
        Self {
            scanner,
            id,
            found: None,
        }
    }

    /// Use an already discovered node for the first open
    pub fn with_node(mut self, node: HidrawNode) -> Self {
        self.found = Some(node);
        self
    }
}

impl Opener for HidrawOpener {
    type Sink = HidrawDevice;
    type Error = DeviceError;

    fn open(&mut self) -> Result<HidrawDevice, DeviceError> {
        match self.found.take() {
            Some(node) => HidrawDevice::open(node),
            None => self.scanner.open(self.id),
        }
    }
}
