//! Image skins for scrollbars.
//!
//! A skin is a list of `(middle, cap)` sprite pairs for the trough and for
//! the handle, one pair per visual state. Each pair is stretched to the
//! widget's exact pixel size with three-slice compositing:
//!
//! ```text
//!   vertical            horizontal (sprites read rotated 90 degrees)
//!   +-------+           +-----+-----------------+-----+
//!   |  cap  |           | cap |  middle, tiled  | pac |
//!   +-------+           +-----+-----------------+-----+
//!   |middle |
//!   | tiled |
//!   +-------+
//!   |  dac  |  <- cap mirrored
//!   +-------+
//! ```
//!
//! Pixels are copied exactly: no blending and no interpolation.

use crate::scrollbar::Scrollbar;
use serde::{Deserialize, Serialize};
use skinscroll_core::{Pixmap, Size};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Most sprite pairs a part can have: one per visual state.
pub const MAX_PAIRS: usize = 4;

/// A skin description is unusable.
#[derive(Debug, Error)]
pub enum SkinSpecError {
    /// The manifest is not valid YAML for a [`SkinSpec`].
    #[error("invalid skin manifest: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The manifest file could not be read.
    #[error("skin manifest not read: {}: {source}", path.display())]
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// More pairs than visual states.
    #[error("{part} has {count} image pairs, at most 4 are allowed")]
    TooManyPairs {
        /// `"trough"` or `"handle"`
        part: &'static str,
        /// Pairs given
        count: usize,
    },

    /// A part without any pair.
    #[error("{part} needs at least one image pair")]
    NoPairs {
        /// `"trough"` or `"handle"`
        part: &'static str,
    },

    /// A flat path list with a hole where a middle image belongs.
    #[error("{part} entry {index} must name a middle image")]
    MissingMiddle {
        /// `"trough"` or `"handle"`
        part: &'static str,
        /// Position in the flat list
        index: usize,
    },
}

/// Middle sprite plus optional end cap. Without a cap the middle sprite is
/// used for the caps too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinPair {
    /// Sprite repeated along the bar
    pub middle: PathBuf,
    /// Sprite drawn at both ends
    #[serde(default)]
    pub cap: Option<PathBuf>,
}

impl SkinPair {
    /// Pair without a cap.
    #[must_use]
    pub fn new(middle: impl Into<PathBuf>) -> Self {
        Self {
            middle: middle.into(),
            cap: None,
        }
    }

    /// Set the cap sprite.
    #[must_use]
    pub fn cap(mut self, cap: impl Into<PathBuf>) -> Self {
        self.cap = Some(cap.into());
        self
    }
}

/// Declarative skin: sprite pairs for each part, in state order
/// (rest, hover, pressed, disabled).
///
/// # Examples
///
/// ```
/// use skinscroll_widgets::SkinSpec;
///
/// let spec = SkinSpec::from_yaml(
///     "trough:\n  - middle: trough.png\nhandle:\n  - middle: handle.png\n    cap: handle_cap.png\n",
/// )
/// .unwrap();
/// assert_eq!(spec.handle[0].cap.as_deref(), Some("handle_cap.png".as_ref()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinSpec {
    /// Trough pairs
    pub trough: Vec<SkinPair>,
    /// Handle pairs
    pub handle: Vec<SkinPair>,
}

impl SkinSpec {
    /// Create and validate.
    pub fn new(trough: Vec<SkinPair>, handle: Vec<SkinPair>) -> Result<Self, SkinSpecError> {
        let spec = Self { trough, handle };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse a YAML manifest.
    pub fn from_yaml(yaml: &str) -> Result<Self, SkinSpecError> {
        let spec: Self = serde_yaml_ng::from_str(yaml)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read a YAML manifest. Relative sprite paths are resolved against the
    /// manifest's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SkinSpecError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| SkinSpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut spec = Self::from_yaml(&yaml)?;
        if let Some(dir) = path.parent() {
            for pair in spec.trough.iter_mut().chain(spec.handle.iter_mut()) {
                pair.middle = dir.join(&pair.middle);
                if let Some(cap) = &mut pair.cap {
                    *cap = dir.join(&*cap);
                }
            }
        }
        Ok(spec)
    }

    /// Build from flat `[middle, cap, middle, cap, ...]` lists.
    ///
    /// A `None` or missing cap means "use the middle". A trailing middle
    /// without a cap is allowed.
    pub fn from_flat_paths<P: AsRef<Path>>(
        trough: &[Option<P>],
        handle: &[Option<P>],
    ) -> Result<Self, SkinSpecError> {
        Self::new(pair_up("trough", trough)?, pair_up("handle", handle)?)
    }

    /// Check pair counts.
    pub fn validate(&self) -> Result<(), SkinSpecError> {
        check_count("trough", self.trough.len())?;
        check_count("handle", self.handle.len())
    }
}

fn check_count(part: &'static str, count: usize) -> Result<(), SkinSpecError> {
    if count == 0 {
        Err(SkinSpecError::NoPairs { part })
    } else if count > MAX_PAIRS {
        Err(SkinSpecError::TooManyPairs { part, count })
    } else {
        Ok(())
    }
}

fn pair_up<P: AsRef<Path>>(
    part: &'static str,
    flat: &[Option<P>],
) -> Result<Vec<SkinPair>, SkinSpecError> {
    flat.chunks(2)
        .enumerate()
        .map(|(i, chunk)| {
            let middle = chunk[0]
                .as_ref()
                .ok_or(SkinSpecError::MissingMiddle { part, index: i * 2 })?;
            let cap = chunk.get(1).and_then(Option::as_ref);
            Ok(SkinPair {
                middle: middle.as_ref().to_path_buf(),
                cap: cap.map(|c| c.as_ref().to_path_buf()),
            })
        })
        .collect()
}

/// Rendered state images, in state order, ready to install.
#[derive(Debug, Clone)]
pub struct SkinImages {
    /// Trough images
    pub trough: [Arc<Pixmap>; 4],
    /// Handle images
    pub handle: [Arc<Pixmap>; 4],
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Sprites {
    middle: Arc<Pixmap>,
    cap: Arc<Pixmap>,
}

impl Sprites {
    fn new(middle: Arc<Pixmap>, cap: Option<Arc<Pixmap>>) -> Self {
        let cap = cap.unwrap_or_else(|| Arc::clone(&middle));
        Self { middle, cap }
    }
}

/// Decoded sprites for a skin, shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSkin {
    trough: Vec<Sprites>,
    handle: Vec<Sprites>,
}

impl ScrollSkin {
    /// Load every sprite a spec names. Each distinct path is decoded once;
    /// sprites that fail to load become empty placeholders and draw nothing.
    pub fn new(spec: &SkinSpec) -> Result<Self, SkinSpecError> {
        spec.validate()?;
        let mut cache: HashMap<PathBuf, Arc<Pixmap>> = HashMap::new();
        let mut load = |path: &Path| {
            Arc::clone(
                cache
                    .entry(path.to_path_buf())
                    .or_insert_with(|| Arc::new(Pixmap::open_or_placeholder(path))),
            )
        };
        let mut sprites = |pairs: &[SkinPair]| -> Vec<Sprites> {
            pairs
                .iter()
                .map(|p| {
                    let middle = load(p.middle.as_path());
                    let cap = p.cap.as_deref().map(&mut load);
                    Sprites::new(middle, cap)
                })
                .collect()
        };
        let trough = sprites(&spec.trough);
        let handle = sprites(&spec.handle);
        Ok(Self { trough, handle })
    }

    /// Build from in-memory `(middle, cap)` sprites.
    pub fn from_pixmaps(
        trough: Vec<(Pixmap, Option<Pixmap>)>,
        handle: Vec<(Pixmap, Option<Pixmap>)>,
    ) -> Result<Self, SkinSpecError> {
        check_count("trough", trough.len())?;
        check_count("handle", handle.len())?;
        let wrap = |pairs: Vec<(Pixmap, Option<Pixmap>)>| -> Vec<Sprites> {
            pairs
                .into_iter()
                .map(|(middle, cap)| Sprites::new(Arc::new(middle), cap.map(Arc::new)))
                .collect()
        };
        Ok(Self {
            trough: wrap(trough),
            handle: wrap(handle),
        })
    }

    /// Render the state images for a trough and handle of the given sizes.
    ///
    /// Parts with fewer than four pairs reuse the first rendered image
    /// (the same `Arc`) for the missing states.
    #[must_use]
    pub fn render(&self, trough: Size, handle: Size, force_horizontal: bool) -> SkinImages {
        SkinImages {
            trough: render_states(&self.trough, trough, force_horizontal),
            handle: render_states(&self.handle, handle, force_horizontal),
        }
    }

    /// Render at the scrollbar's current geometry and install the images.
    ///
    /// This is a one-off; use [`Scrollbar::set_skin`] to keep the skin in
    /// sync with later resizes.
    pub fn draw_to(&self, bar: &mut Scrollbar) {
        let images = self.render(
            bar.trough_size(),
            bar.handle_size(),
            bar.forces_horizontal_skin(),
        );
        bar.install_skin_images(images);
    }
}

fn render_states(pairs: &[Sprites], size: Size, force_horizontal: bool) -> [Arc<Pixmap>; 4] {
    let (width, height) = size.to_pixels();
    let draw = |s: &Sprites| Arc::new(render_bar(&s.middle, &s.cap, width, height, force_horizontal));

    let first = match pairs.first() {
        Some(sprites) => draw(sprites),
        None => Arc::new(Pixmap::new(width, height)),
    };
    let mut states = [
        Arc::clone(&first),
        Arc::clone(&first),
        Arc::clone(&first),
        first,
    ];
    for (slot, sprites) in states.iter_mut().zip(pairs).skip(1) {
        *slot = draw(sprites);
    }
    states
}

/// How a sprite is read while tiling a region.
#[derive(Debug, Clone, Copy, Default)]
struct Transform {
    /// Read `src(y, x)` instead of `src(x, y)`
    rotate: bool,
    mirror_x: bool,
    mirror_y: bool,
}

/// Target region, half-open, possibly hanging off the image.
#[derive(Debug, Clone, Copy)]
struct Region {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

/// Three-slice stretch of `middle` and `cap` into a `width` x `height` bar.
///
/// The bar is horizontal when forced or when `width > height`; otherwise
/// vertical. Empty sprites leave their region transparent.
#[must_use]
pub fn render_bar(
    middle: &Pixmap,
    cap: &Pixmap,
    width: u32,
    height: u32,
    force_horizontal: bool,
) -> Pixmap {
    let mut out = Pixmap::new(width, height);
    let (w, h) = (i64::from(width), i64::from(height));
    let c = i64::from(cap.height());

    if force_horizontal || width > height {
        let rotate = Transform {
            rotate: true,
            ..Transform::default()
        };
        blit(&mut out, cap, Region { x0: 0, y0: 0, x1: c, y1: h }, rotate);
        // caps overlapping the whole bar leave no middle
        if w > 2 * c {
            blit(&mut out, middle, Region { x0: c, y0: 0, x1: w - c, y1: h }, rotate);
        }
        let end = Transform {
            mirror_x: true,
            ..rotate
        };
        blit(&mut out, cap, Region { x0: w - c, y0: 0, x1: w, y1: h }, end);
    } else {
        let plain = Transform::default();
        blit(&mut out, cap, Region { x0: 0, y0: 0, x1: w, y1: c }, plain);
        // caps overlapping the whole bar leave no middle
        if h > 2 * c {
            blit(&mut out, middle, Region { x0: 0, y0: c, x1: w, y1: h - c }, plain);
        }
        let end = Transform {
            mirror_y: true,
            ..plain
        };
        blit(&mut out, cap, Region { x0: 0, y0: h - c, x1: w, y1: h }, end);
    }
    out
}

/// Tile `src` over `region` of `out`, starting at the region's corner.
fn blit(out: &mut Pixmap, src: &Pixmap, region: Region, t: Transform) {
    if src.is_empty() {
        return;
    }
    let (bw, bh) = if t.rotate {
        (i64::from(src.height()), i64::from(src.width()))
    } else {
        (i64::from(src.width()), i64::from(src.height()))
    };
    let x0 = region.x0.max(0);
    let y0 = region.y0.max(0);
    let x1 = region.x1.min(i64::from(out.width()));
    let y1 = region.y1.min(i64::from(out.height()));

    for y in y0..y1 {
        for x in x0..x1 {
            let mut bx = (x - region.x0) % bw;
            let mut by = (y - region.y0) % bh;
            if t.mirror_x {
                bx = bw - 1 - bx;
            }
            if t.mirror_y {
                by = bh - 1 - by;
            }
            let (sx, sy) = if t.rotate { (by, bx) } else { (bx, by) };
            if let Some(px) = src.get_pixel(sx as u32, sy as u32) {
                out.put_pixel(x as u32, y as u32, px);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrollbar::{LinkConfig, ViewportMetrics};
    use proptest::prelude::*;
    use skinscroll_core::WidgetId;

    /// Sprite whose pixels encode their own coordinates.
    fn coded(tag: u8, w: u32, h: u32) -> Pixmap {
        Pixmap::from_fn(w, h, |x, y| [tag, x as u8, y as u8, 255])
    }

    fn px(p: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        p.get_pixel(x, y).unwrap()
    }

    // =========================================================================
    // Vertical Compositing Tests
    // =========================================================================

    #[test]
    fn test_vertical_caps_and_middle() {
        let cap = coded(1, 4, 3);
        let middle = coded(2, 4, 2);
        let out = render_bar(&middle, &cap, 4, 12, false);

        assert_eq!((out.width(), out.height()), (4, 12));
        // top cap unmodified
        assert_eq!(px(&out, 3, 0), [1, 3, 0, 255]);
        assert_eq!(px(&out, 2, 2), [1, 2, 2, 255]);
        // middle tiled from row 3
        assert_eq!(px(&out, 1, 3), [2, 1, 0, 255]);
        assert_eq!(px(&out, 1, 4), [2, 1, 1, 255]);
        assert_eq!(px(&out, 1, 5), [2, 1, 0, 255]);
        assert_eq!(px(&out, 1, 8), [2, 1, 1, 255]);
        // bottom cap mirrored top-to-bottom
        assert_eq!(px(&out, 0, 9), [1, 0, 2, 255]);
        assert_eq!(px(&out, 0, 11), [1, 0, 0, 255]);
    }

    #[test]
    fn test_vertical_tiles_across_width() {
        let cap = coded(1, 2, 1);
        let middle = coded(2, 2, 1);
        let out = render_bar(&middle, &cap, 5, 6, false);
        assert_eq!(px(&out, 4, 0), [1, 0, 0, 255]);
        assert_eq!(px(&out, 3, 2), [2, 1, 0, 255]);
    }

    #[test]
    fn test_square_is_vertical() {
        let cap = coded(1, 4, 1);
        let middle = coded(2, 4, 1);
        let out = render_bar(&middle, &cap, 4, 4, false);
        assert_eq!(px(&out, 3, 0), [1, 3, 0, 255]);
        assert_eq!(px(&out, 3, 1), [2, 3, 0, 255]);
    }

    #[test]
    fn test_degenerate_height_draws_bottom_cap_last() {
        let cap = coded(1, 2, 3);
        let middle = coded(2, 2, 1);
        let out = render_bar(&middle, &cap, 2, 4, false);
        // bottom cap starts at row 1 and wins over the top cap there
        assert_eq!(px(&out, 0, 0), [1, 0, 0, 255]);
        assert_eq!(px(&out, 0, 1), [1, 0, 2, 255]);
        assert_eq!(px(&out, 0, 3), [1, 0, 0, 255]);
        assert!((0..4).all(|y| px(&out, 1, y)[0] == 1));
    }

    #[test]
    fn test_empty_sprites_draw_nothing() {
        let out = render_bar(&Pixmap::empty(), &Pixmap::empty(), 3, 9, false);
        assert_eq!((out.width(), out.height()), (3, 9));
        assert_eq!(px(&out, 1, 4), [0, 0, 0, 0]);
    }

    // =========================================================================
    // Horizontal Compositing Tests
    // =========================================================================

    #[test]
    fn test_horizontal_reads_transposed() {
        // cap 2 wide, 3 tall: rotated it spans 3 columns and 2 rows
        let cap = coded(1, 2, 3);
        let middle = coded(2, 2, 2);
        let out = render_bar(&middle, &cap, 10, 2, false);

        // left cap: out(x, y) = cap(y, x)
        assert_eq!(px(&out, 0, 1), [1, 1, 0, 255]);
        assert_eq!(px(&out, 2, 0), [1, 0, 2, 255]);
        // middle from column 3: out(x, y) = middle(y, (x - 3) % 2)
        assert_eq!(px(&out, 3, 1), [2, 1, 0, 255]);
        assert_eq!(px(&out, 4, 0), [2, 0, 1, 255]);
        assert_eq!(px(&out, 6, 0), [2, 0, 1, 255]);
        // right cap mirrored left-to-right
        assert_eq!(px(&out, 7, 0), [1, 0, 2, 255]);
        assert_eq!(px(&out, 9, 1), [1, 1, 0, 255]);
    }

    #[test]
    fn test_forced_horizontal() {
        let cap = coded(1, 4, 1);
        let middle = coded(2, 4, 1);
        let out = render_bar(&middle, &cap, 4, 8, true);
        // rotated cap is 1 column wide, 4 rows tall
        assert_eq!(px(&out, 0, 3), [1, 3, 0, 255]);
        assert_eq!(px(&out, 1, 2), [2, 2, 0, 255]);
        assert_eq!(px(&out, 3, 1), [1, 1, 0, 255]);
    }

    // =========================================================================
    // Skin Tests
    // =========================================================================

    fn one_pair_skin() -> ScrollSkin {
        ScrollSkin::from_pixmaps(
            vec![(coded(10, 4, 2), None)],
            vec![(coded(20, 4, 2), Some(coded(21, 4, 1)))],
        )
        .unwrap()
    }

    #[test]
    fn test_missing_states_share_first_render() {
        let images = one_pair_skin().render(Size::new(4.0, 40.0), Size::new(4.0, 10.0), false);
        for state in &images.handle[1..] {
            assert!(Arc::ptr_eq(state, &images.handle[0]));
        }
        assert_eq!(images.handle[0].height(), 10);
        assert_eq!(images.trough[0].height(), 40);
    }

    #[test]
    fn test_distinct_pairs_render_separately() {
        let skin = ScrollSkin::from_pixmaps(
            vec![(coded(10, 4, 2), None)],
            vec![(coded(20, 4, 2), None), (coded(30, 4, 2), None)],
        )
        .unwrap();
        let images = skin.render(Size::new(4.0, 40.0), Size::new(4.0, 10.0), false);
        assert_eq!(px(&images.handle[1], 0, 0)[0], 30);
        assert!(Arc::ptr_eq(&images.handle[2], &images.handle[0]));
    }

    #[test]
    fn test_missing_cap_uses_middle() {
        let images = one_pair_skin().render(Size::new(4.0, 8.0), Size::new(4.0, 4.0), false);
        assert_eq!(px(&images.trough[0], 0, 0)[0], 10);
        assert_eq!(px(&images.trough[0], 0, 7)[0], 10);
    }

    #[test]
    fn test_pair_count_limits() {
        let pair = || (Pixmap::new(1, 1), None);
        assert!(matches!(
            ScrollSkin::from_pixmaps(vec![pair(); 5], vec![pair()]),
            Err(SkinSpecError::TooManyPairs { part: "trough", count: 5 })
        ));
        assert!(matches!(
            ScrollSkin::from_pixmaps(vec![pair()], vec![]),
            Err(SkinSpecError::NoPairs { part: "handle" })
        ));
    }

    #[test]
    fn test_draw_to_installs_sized_images() {
        let mut bar = Scrollbar::new(Size::new(4.0, 40.0), Size::new(4.0, 4.0)).unwrap();
        one_pair_skin().draw_to(&mut bar);
        assert!(bar.trough().is_active());
        assert_eq!(bar.trough().get_images().unwrap()[0].height(), 40);
    }

    #[test]
    fn test_set_skin_rerenders_on_resize() {
        let mut bar = Scrollbar::new(Size::new(4.0, 40.0), Size::new(4.0, 4.0)).unwrap();
        bar.set_skin(one_pair_skin());
        let metrics = ViewportMetrics::new(Size::new(10.0, 100.0), Size::new(10.0, 400.0));
        bar.link(WidgetId::next(), metrics, LinkConfig::vertical());
        bar.resize_handle().unwrap();

        let handle = bar.handle().current_image().unwrap();
        assert_eq!((handle.width(), handle.height()), (4, 10));
    }

    // =========================================================================
    // Spec Parsing Tests
    // =========================================================================

    #[test]
    fn test_from_yaml() {
        let spec = SkinSpec::from_yaml(
            "trough:\n  - middle: t0.png\n  - middle: t1.png\n    cap: t1c.png\nhandle:\n  - middle: h0.png\n",
        )
        .unwrap();
        assert_eq!(spec.trough.len(), 2);
        assert_eq!(spec.trough[1], SkinPair::new("t1.png").cap("t1c.png"));
        assert_eq!(spec.handle[0].cap, None);
    }

    #[test]
    fn test_from_yaml_rejects_too_many_pairs() {
        let yaml = "trough:\n  - middle: a\nhandle:\n  - middle: a\n  - middle: b\n  - middle: c\n  - middle: d\n  - middle: e\n";
        assert!(matches!(
            SkinSpec::from_yaml(yaml),
            Err(SkinSpecError::TooManyPairs { part: "handle", count: 5 })
        ));
        assert!(matches!(
            SkinSpec::from_yaml("trough: 3"),
            Err(SkinSpecError::Yaml(_))
        ));
    }

    #[test]
    fn test_from_flat_paths() {
        let spec = SkinSpec::from_flat_paths(
            &[Some("m0"), None, Some("m1"), Some("c1"), Some("m2")],
            &[Some("h")],
        )
        .unwrap();
        assert_eq!(
            spec.trough,
            vec![
                SkinPair::new("m0"),
                SkinPair::new("m1").cap("c1"),
                SkinPair::new("m2"),
            ]
        );
        assert!(matches!(
            SkinSpec::from_flat_paths(&[None, Some("c")], &[Some("h")]),
            Err(SkinSpecError::MissingMiddle { part: "trough", index: 0 })
        ));
    }

    #[test]
    fn test_load_from_manifest_file() {
        let dir = std::env::temp_dir().join(format!("skinscroll-skin-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        coded(7, 3, 2).save(dir.join("middle.png")).unwrap();
        std::fs::write(
            dir.join("skin.yaml"),
            "trough:\n  - middle: middle.png\nhandle:\n  - middle: middle.png\n    cap: missing.png\n",
        )
        .unwrap();

        let spec = SkinSpec::from_file(dir.join("skin.yaml")).unwrap();
        let skin = ScrollSkin::new(&spec).unwrap();
        assert!(Arc::ptr_eq(&skin.trough[0].middle, &skin.handle[0].middle));
        assert_eq!(skin.trough[0].middle.width(), 3);
        assert!(skin.handle[0].cap.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        assert!(matches!(
            SkinSpec::from_file("/no/such/skin.yaml"),
            Err(SkinSpecError::Io { .. })
        ));
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #[test]
        fn prop_vertical_caps_exact_and_mirrored(
            width in 1u32..12,
            cap_w in 1u32..6,
            cap_h in 1u32..8,
            extra in 0u32..40,
        ) {
            let cap = coded(1, cap_w, cap_h);
            let middle = coded(2, 3, 2);
            let height = 2 * cap_h + extra;
            prop_assume!(width <= height);
            let out = render_bar(&middle, &cap, width, height, false);

            prop_assert_eq!(out.height(), height);
            prop_assert_eq!(out.width(), width);
            for x in 0..width {
                for y in 0..cap_h {
                    prop_assert_eq!(px(&out, x, y), px(&cap, x % cap_w, y));
                    prop_assert_eq!(
                        px(&out, x, height - cap_h + y),
                        px(&cap, x % cap_w, cap_h - 1 - y)
                    );
                }
            }
        }
    }
}
