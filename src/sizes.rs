/// Device class an icon targets. Rendered into `Contents.json` as the `idiom` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Idiom {
    Phone,
    Tablet,
    Storefront,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Phone => "iphone",
            Idiom::Tablet => "ipad",
            Idiom::Storefront => "ios-marketing",
        }
    }
}

/// One row of the icon table: a point size at a given scale for one idiom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    pub points: f64,
    pub scale: u32,
    pub idiom: Idiom,
    pub file_name: &'static str,
}

impl IconSpec {
    const fn new(points: f64, scale: u32, idiom: Idiom, file_name: &'static str) -> Self {
        Self { points, scale, idiom, file_name }
    }

    /// Edge length in pixels. Truncates, never rounds.
    pub fn pixel_size(&self) -> u32 {
        (self.points * self.scale as f64).floor() as u32
    }

    /// `"60x60"` for whole point sizes, `"83.5x83.5"` otherwise.
    pub fn size_label(&self) -> String {
        if self.points.fract() == 0.0 {
            let p = self.points as u64;
            format!("{}x{}", p, p)
        } else {
            format!("{}x{}", self.points, self.points)
        }
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

// Xcode 13 iOS app icon set
pub static ICON_SIZES: [IconSpec; 18] = [
    // iPhone notification
    IconSpec::new(20.0, 2, Idiom::Phone, "icon-20@2x.png"),
    IconSpec::new(20.0, 3, Idiom::Phone, "icon-20@3x.png"),
    // iPhone settings
    IconSpec::new(29.0, 2, Idiom::Phone, "icon-29@2x.png"),
    IconSpec::new(29.0, 3, Idiom::Phone, "icon-29@3x.png"),
    // iPhone spotlight
    IconSpec::new(40.0, 2, Idiom::Phone, "icon-40@2x.png"),
    IconSpec::new(40.0, 3, Idiom::Phone, "icon-40@3x.png"),
    // iPhone app
    IconSpec::new(60.0, 2, Idiom::Phone, "icon-60@2x.png"),
    IconSpec::new(60.0, 3, Idiom::Phone, "icon-60@3x.png"),
    // iPad notification
    IconSpec::new(20.0, 1, Idiom::Tablet, "icon-20-ipad.png"),
    IconSpec::new(20.0, 2, Idiom::Tablet, "icon-20@2x-ipad.png"),
    // iPad settings
    IconSpec::new(29.0, 1, Idiom::Tablet, "icon-29-ipad.png"),
    IconSpec::new(29.0, 2, Idiom::Tablet, "icon-29@2x-ipad.png"),
    // iPad spotlight
    IconSpec::new(40.0, 1, Idiom::Tablet, "icon-40-ipad.png"),
    IconSpec::new(40.0, 2, Idiom::Tablet, "icon-40@2x-ipad.png"),
    // iPad app
    IconSpec::new(76.0, 1, Idiom::Tablet, "icon-76.png"),
    IconSpec::new(76.0, 2, Idiom::Tablet, "icon-76@2x.png"),
    // iPad Pro app
    IconSpec::new(83.5, 2, Idiom::Tablet, "icon-83.5@2x.png"),
    // App Store
    IconSpec::new(1024.0, 1, Idiom::Storefront, "icon-1024.png"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = ICON_SIZES.iter().map(|s| s.file_name).collect();
        assert_eq!(names.len(), ICON_SIZES.len());
    }

    #[test]
    fn test_pixel_sizes() {
        let px: Vec<u32> = ICON_SIZES.iter().map(|s| s.pixel_size()).collect();
        assert_eq!(
            px,
            vec![40, 60, 58, 87, 80, 120, 120, 180, 20, 40, 29, 58, 40, 80, 76, 152, 167, 1024]
        );
    }

    #[test]
    fn test_pixel_size_truncates() {
        let s = IconSpec::new(10.75, 3, Idiom::Phone, "x.png");
        assert_eq!(s.pixel_size(), 32);
        let s = IconSpec::new(83.5, 2, Idiom::Tablet, "y.png");
        assert_eq!(s.pixel_size(), 167);
    }

    #[test]
    fn test_labels() {
        let pro = ICON_SIZES.iter().find(|s| s.file_name == "icon-83.5@2x.png").unwrap();
        assert_eq!(pro.size_label(), "83.5x83.5");
        assert_eq!(pro.scale_label(), "2x");
        assert_eq!(ICON_SIZES[7].size_label(), "60x60");
        assert_eq!(ICON_SIZES[7].scale_label(), "3x");
        assert_eq!(ICON_SIZES[17].size_label(), "1024x1024");
    }

    #[test]
    fn test_idiom_strings() {
        assert_eq!(Idiom::Phone.as_str(), "iphone");
        assert_eq!(Idiom::Tablet.as_str(), "ipad");
        assert_eq!(Idiom::Storefront.as_str(), "ios-marketing");
    }
}
