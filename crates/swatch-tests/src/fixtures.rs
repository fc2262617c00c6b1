//! Hand-assembled swatch files
//!
//! Every fixture pairs raw bytes, written out field by field without going
//! through the encoder, with the document those bytes describe.

use swatch_core::{Color, Document, Group, Usage};

/// Group-end chunk: tag plus its four zero bytes
pub const GROUP_END: [u8; 6] = [0xC0, 0x02, 0x00, 0x00, 0x00, 0x00];

/// Builds a raw swatch file one field at a time
#[derive(Debug, Default, Clone)]
pub struct FileBuilder {
    body: Vec<u8>,
    chunks: u32,
}

impl FileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn title(name: &str) -> Vec<u8> {
        let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
        let mut out = (units.len() as u16).to_be_bytes().to_vec();
        for unit in units {
            out.extend_from_slice(&unit.to_be_bytes());
        }
        out
    }

    fn chunk(&mut self, tag: [u8; 2], payload: &[u8]) -> &mut Self {
        self.body.extend_from_slice(&tag);
        self.body
            .extend_from_slice(&(payload.len() as u32).to_be_bytes());
        self.body.extend_from_slice(payload);
        self.chunks += 1;
        self
    }

    /// Color chunk with an explicit space tag and usage code
    pub fn color(&mut self, name: &str, space: &[u8; 4], values: &[f32], usage: i16) -> &mut Self {
        let mut payload = Self::title(name);
        payload.extend_from_slice(space);
        for value in values {
            payload.extend_from_slice(&value.to_be_bytes());
        }
        payload.extend_from_slice(&usage.to_be_bytes());
        self.chunk([0x00, 0x01], &payload)
    }

    pub fn group_start(&mut self, name: &str) -> &mut Self {
        let payload = Self::title(name);
        self.chunk([0xC0, 0x01], &payload)
    }

    pub fn group_end(&mut self) -> &mut Self {
        self.body.extend_from_slice(&GROUP_END);
        self.chunks += 1;
        self
    }

    /// Append bytes that are not counted as a chunk
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.body.extend_from_slice(bytes);
        self
    }

    /// Body only, no header
    pub fn body(&self) -> Vec<u8> {
        self.body.clone()
    }

    /// Header with the number of chunks written so far, then the body
    pub fn file(&self) -> Vec<u8> {
        self.file_with_count(self.chunks)
    }

    /// Header declaring `chunk_count`, then the body
    pub fn file_with_count(&self, chunk_count: u32) -> Vec<u8> {
        let mut out = b"ASEF".to_vec();
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&chunk_count.to_be_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}

/// A known file and its decoded form
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub bytes: Vec<u8>,
    pub document: Document,
}

/// One white RGB swatch, no groups
pub fn white_swatch_no_folder() -> Fixture {
    let bytes = FileBuilder::new()
        .color("White", b"RGB ", &[1.0, 1.0, 1.0], 2)
        .file();

    let mut document = Document::new();
    document.push(Color::rgb("White", [1.0, 1.0, 1.0], Usage::Process));

    Fixture {
        name: "white swatch no folder",
        bytes,
        document,
    }
}

/// A named group with no members
pub fn empty_white_folder() -> Fixture {
    let bytes = FileBuilder::new().group_start("White").group_end().file();

    let mut document = Document::new();
    document.push(Group::new("White"));

    Fixture {
        name: "empty white folder",
        bytes,
        document,
    }
}

/// A group holding one white swatch
pub fn single_white_swatch_in_folder() -> Fixture {
    let bytes = FileBuilder::new()
        .group_start("White")
        .color("White", b"RGB ", &[1.0, 1.0, 1.0], 0)
        .group_end()
        .file();

    let mut document = Document::new();
    document.push(Group::with_colors(
        "White",
        vec![Color::rgb("White", [1.0, 1.0, 1.0], Usage::Global)],
    ));

    Fixture {
        name: "single white swatch in folder",
        bytes,
        document,
    }
}

/// A loose gray swatch followed by a group mixing CMYK and LAB
pub fn sampler() -> Fixture {
    let green = [0.527_977_4, 0.243_869_66, 1.0, 0.043_030_44];
    let violet = [0.626_184_46, 0.589_013_46, 3.051_804_4e-5, 3.051_804_4e-5];
    let cyan = [0.6, -35.0, -5.0];

    let bytes = FileBuilder::new()
        .color("Light Grey", b"Gray", &[0.75], 2)
        .group_start("Accent Colors")
        .color("Green", b"CMYK", &green, 2)
        .color("Violet Process Global", b"CMYK", &violet, 0)
        .color("Cyan Spot (global)", b"LAB ", &cyan, 1)
        .group_end()
        .file();

    let mut document = Document::new();
    document.push(Color::gray("Light Grey", 0.75, Usage::Process));
    document.push(Group::with_colors(
        "Accent Colors",
        vec![
            Color::cmyk("Green", green, Usage::Process),
            Color::cmyk("Violet Process Global", violet, Usage::Global),
            Color::lab("Cyan Spot (global)", cyan, Usage::Spot),
        ],
    ));

    Fixture {
        name: "sampler",
        bytes,
        document,
    }
}

/// The Solarized palette as LAB spot colors in one group
pub fn solarized() -> Fixture {
    const PALETTE: [(&str, [f32; 3]); 16] = [
        ("base03", [0.15, -12.0, -12.0]),
        ("base02", [0.20, -12.0, -12.0]),
        ("base01", [0.45, -7.0, -7.0]),
        ("base00", [0.50, -7.0, -7.0]),
        ("base0", [0.60, -6.0, -3.0]),
        ("base1", [0.65, -5.0, -2.0]),
        ("base2", [0.92, 0.0, 10.0]),
        ("base3", [0.97, 0.0, 10.0]),
        ("yellow", [0.60, 10.0, 65.0]),
        ("orange", [0.50, 50.0, 55.0]),
        ("red", [0.50, 65.0, 45.0]),
        ("magenta", [0.50, 65.0, -5.0]),
        ("violet", [0.50, 15.0, -45.0]),
        ("blue", [0.55, -10.0, -45.0]),
        ("cyan", [0.60, -35.0, -5.0]),
        ("green", [0.60, -20.0, 65.0]),
    ];

    let mut builder = FileBuilder::new();
    builder.group_start("Solarized");
    let mut group = Group::new("Solarized");
    for (name, lab) in PALETTE {
        builder.color(name, b"LAB ", &lab, 1);
        group.push(Color::lab(name, lab, Usage::Spot));
    }
    builder.group_end();

    let mut document = Document::new();
    document.push(group);

    Fixture {
        name: "solarized",
        bytes: builder.file(),
        document,
    }
}

/// Non-ASCII names, including characters outside the BMP
pub fn unicode_names() -> Fixture {
    let bytes = FileBuilder::new()
        .group_start("Couleurs d'été")
        .color("Rouge carmin", b"RGB ", &[0.8, 0.0, 0.1], 1)
        .color("藍色", b"CMYK", &[1.0, 0.6, 0.0, 0.2], 2)
        .group_end()
        .color("\u{1F3A8} palette", b"Gray", &[0.0], 0)
        .file();

    let mut document = Document::new();
    document.push(Group::with_colors(
        "Couleurs d'été",
        vec![
            Color::rgb("Rouge carmin", [0.8, 0.0, 0.1], Usage::Spot),
            Color::cmyk("藍色", [1.0, 0.6, 0.0, 0.2], Usage::Process),
        ],
    ));
    document.push(Color::gray("\u{1F3A8} palette", 0.0, Usage::Global));

    Fixture {
        name: "unicode names",
        bytes,
        document,
    }
}

/// Every fixture
pub fn all_fixtures() -> Vec<Fixture> {
    vec![
        white_swatch_no_folder(),
        empty_white_folder(),
        single_white_swatch_in_folder(),
        sampler(),
        solarized(),
        unicode_names(),
    ]
}
