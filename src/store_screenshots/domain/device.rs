/// A named App Store output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

pub static DEVICE_PROFILES: [DeviceProfile; 5] = [
    DeviceProfile {
        key: "iphone_6_9",
        width: 1320,
        height: 2868,
        label: "iPhone 16 Pro Max (6.9\")",
    },
    DeviceProfile {
        key: "iphone_6_7",
        width: 1290,
        height: 2796,
        label: "iPhone 14 Pro Max (6.7\")",
    },
    DeviceProfile {
        key: "iphone_6_5",
        width: 1284,
        height: 2778,
        label: "iPhone 14 Plus (6.5\")",
    },
    DeviceProfile {
        key: "iphone_6_1",
        width: 1170,
        height: 2532,
        label: "iPhone 14 Pro (6.1\")",
    },
    DeviceProfile {
        key: "ipad_13",
        width: 2064,
        height: 2752,
        label: "iPad Pro 13\"",
    },
];

impl DeviceProfile {
    pub fn find(key: &str) -> Option<DeviceProfile> {
        DEVICE_PROFILES.iter().copied().find(|device| device.key == key)
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        DEVICE_PROFILES.iter().map(|device| device.key)
    }
}
