//! The fixed catalog of placeable element kinds.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Palette category an element kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rooms,
    Structure,
    Furniture,
    Equipment,
    Symbols,
}

impl Category {
    /// Display label for the palette section.
    pub fn label(self) -> &'static str {
        match self {
            Category::Rooms => "Rooms",
            Category::Structure => "Structure",
            Category::Furniture => "Furniture",
            Category::Equipment => "Equipment",
            Category::Symbols => "Symbols",
        }
    }

    /// All categories in palette order.
    pub fn all() -> [Category; 5] {
        [
            Category::Rooms,
            Category::Structure,
            Category::Furniture,
            Category::Equipment,
            Category::Symbols,
        ]
    }
}

/// Every kind of element that can be placed on the board.
///
/// The serialized tags (`bed`, `wall_h`, ...) are the wire format of saved
/// layouts, so variants must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    // Rooms
    TraumaRoom,
    ExamRoom,
    XrayRoom,
    CtRoom,
    OperatingRoom,
    WaitingRoom,
    Office,
    ConferenceRoom,
    AmbulanceBay,
    ParkingLot,
    UtilityRoom,
    StaffLounge,
    // Structure
    WallH,
    WallV,
    CornerWall,
    Door,
    FireExit,
    Curtain,
    Elevator,
    Stairwell,
    // Furniture
    Bed,
    Gurney,
    Chair,
    Desk,
    NursesStation,
    Cabinet,
    Sink,
    // Equipment
    Computer,
    Pyxis,
    // Symbols
    BlankBox,
    TextBox,
    Annotation,
}

impl ElementKind {
    /// All kinds in palette order.
    pub fn all() -> &'static [ElementKind] {
        use ElementKind::*;
        &[
            TraumaRoom, ExamRoom, XrayRoom, CtRoom, OperatingRoom, WaitingRoom,
            Office, ConferenceRoom, AmbulanceBay, ParkingLot, UtilityRoom,
            StaffLounge, WallH, WallV, CornerWall, Door, FireExit, Curtain,
            Elevator, Stairwell, Bed, Gurney, Chair, Desk, NursesStation,
            Cabinet, Sink, Computer, Pyxis, BlankBox, TextBox, Annotation,
        ]
    }

    /// Palette category for this kind.
    pub fn category(self) -> Category {
        use ElementKind::*;
        match self {
            TraumaRoom | ExamRoom | XrayRoom | CtRoom | OperatingRoom
            | WaitingRoom | Office | ConferenceRoom | AmbulanceBay
            | ParkingLot | UtilityRoom | StaffLounge => Category::Rooms,
            WallH | WallV | CornerWall | Door | FireExit | Curtain | Elevator
            | Stairwell => Category::Structure,
            Bed | Gurney | Chair | Desk | NursesStation | Cabinet | Sink => {
                Category::Furniture
            }
            Computer | Pyxis => Category::Equipment,
            BlankBox | TextBox | Annotation => Category::Symbols,
        }
    }

    /// Human-readable name, used for captions and palette entries.
    pub fn display_name(self) -> &'static str {
        use ElementKind::*;
        match self {
            TraumaRoom => "Trauma Room",
            ExamRoom => "Exam Room",
            XrayRoom => "X-Ray Room",
            CtRoom => "CT Room",
            OperatingRoom => "Operating Room",
            WaitingRoom => "Waiting Room",
            Office => "Office",
            ConferenceRoom => "Conference Room",
            AmbulanceBay => "Ambulance Bay",
            ParkingLot => "Parking Lot",
            UtilityRoom => "Utility Room",
            StaffLounge => "Staff Lounge",
            WallH => "Wall (Horizontal)",
            WallV => "Wall (Vertical)",
            CornerWall => "Corner Wall",
            Door => "Door",
            FireExit => "Fire Exit",
            Curtain => "Curtain",
            Elevator => "Elevator",
            Stairwell => "Stairwell",
            Bed => "Bed",
            Gurney => "Gurney",
            Chair => "Chair",
            Desk => "Desk",
            NursesStation => "Nurses Station",
            Cabinet => "Cabinet",
            Sink => "Sink",
            Computer => "Computer",
            Pyxis => "Pyxis",
            BlankBox => "Blank Box",
            TextBox => "Text Box",
            Annotation => "Annotation",
        }
    }

    /// Default size assigned when a kind is dropped onto the board.
    pub fn default_size(self) -> Size {
        use ElementKind::*;
        match self {
            TraumaRoom => Size::new(180.0, 180.0),
            ExamRoom => Size::new(140.0, 140.0),
            XrayRoom => Size::new(160.0, 160.0),
            CtRoom => Size::new(180.0, 180.0),
            OperatingRoom => Size::new(200.0, 200.0),
            WaitingRoom => Size::new(200.0, 180.0),
            Office => Size::new(120.0, 120.0),
            ConferenceRoom => Size::new(180.0, 140.0),
            AmbulanceBay => Size::new(240.0, 200.0),
            ParkingLot => Size::new(260.0, 220.0),
            WallH => Size::new(200.0, 20.0),
            WallV => Size::new(20.0, 200.0),
            Door => Size::new(80.0, 20.0),
            Bed => Size::new(80.0, 100.0),
            Gurney => Size::new(100.0, 80.0),
            Chair => Size::new(40.0, 40.0),
            Desk => Size::new(100.0, 60.0),
            Cabinet => Size::new(60.0, 40.0),
            Sink => Size::new(50.0, 50.0),
            Computer => Size::new(60.0, 60.0),
            BlankBox => Size::new(100.0, 80.0),
            TextBox => Size::new(150.0, 50.0),
            _ => Size::new(60.0, 60.0),
        }
    }
}

/// A primitive figure in unit space, scaled to the element's extent when
/// drawn. Coordinates and radii are fractions of width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Rect { x: f64, y: f64, w: f64, h: f64, filled: bool },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64, filled: bool },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// How an element kind is drawn: outline treatment, inner decorations, and
/// whether its name is captioned inside the outline.
#[derive(Debug, Clone, Copy)]
pub struct DrawSpec {
    /// Solid fill instead of the translucent blueprint wash.
    pub solid: bool,
    /// Decoration figures drawn inside the outline.
    pub decorations: &'static [Figure],
    /// Draw the kind name (uppercased) centered in the outline.
    pub caption: bool,
}

/// Drawing dispatch table. Adding a kind means adding a row here, nothing
/// downstream switches on the kind.
pub fn draw_spec(kind: ElementKind) -> DrawSpec {
    use ElementKind::*;
    use Figure::*;

    const PLAIN: DrawSpec = DrawSpec { solid: false, decorations: &[], caption: true };
    const SOLID: DrawSpec = DrawSpec { solid: true, decorations: &[], caption: false };

    match kind {
        WallH | WallV | CornerWall => SOLID,
        Curtain => DrawSpec {
            solid: false,
            decorations: &[
                Line { x1: 0.0, y1: 0.5, x2: 0.25, y2: 0.2 },
                Line { x1: 0.25, y1: 0.2, x2: 0.5, y2: 0.8 },
                Line { x1: 0.5, y1: 0.8, x2: 0.75, y2: 0.2 },
                Line { x1: 0.75, y1: 0.2, x2: 1.0, y2: 0.5 },
            ],
            caption: false,
        },
        Door => DrawSpec {
            solid: false,
            decorations: &[Line { x1: 0.0, y1: 1.0, x2: 1.0, y2: 0.0 }],
            caption: false,
        },
        Bed => DrawSpec {
            solid: false,
            decorations: &[Rect { x: 0.15, y: 0.05, w: 0.7, h: 0.2, filled: false }],
            caption: true,
        },
        Gurney => DrawSpec {
            solid: false,
            decorations: &[
                Ellipse { cx: 0.15, cy: 0.9, rx: 0.06, ry: 0.08, filled: false },
                Ellipse { cx: 0.85, cy: 0.9, rx: 0.06, ry: 0.08, filled: false },
            ],
            caption: true,
        },
        Chair => DrawSpec {
            solid: false,
            decorations: &[Rect { x: 0.1, y: 0.0, w: 0.8, h: 0.2, filled: true }],
            caption: false,
        },
        Desk | NursesStation => DrawSpec {
            solid: false,
            decorations: &[Rect { x: 0.1, y: 0.55, w: 0.35, h: 0.35, filled: false }],
            caption: true,
        },
        Sink => DrawSpec {
            solid: false,
            decorations: &[Ellipse { cx: 0.5, cy: 0.5, rx: 0.3, ry: 0.3, filled: false }],
            caption: false,
        },
        Computer => DrawSpec {
            solid: false,
            decorations: &[Rect { x: 0.2, y: 0.15, w: 0.6, h: 0.4, filled: false }],
            caption: false,
        },
        Stairwell => DrawSpec {
            solid: false,
            decorations: &[
                Line { x1: 0.0, y1: 0.25, x2: 1.0, y2: 0.25 },
                Line { x1: 0.0, y1: 0.5, x2: 1.0, y2: 0.5 },
                Line { x1: 0.0, y1: 0.75, x2: 1.0, y2: 0.75 },
            ],
            caption: false,
        },
        Elevator => DrawSpec {
            solid: false,
            decorations: &[
                Line { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 },
                Line { x1: 1.0, y1: 0.0, x2: 0.0, y2: 1.0 },
            ],
            caption: false,
        },
        _ => PLAIN,
    }
}
