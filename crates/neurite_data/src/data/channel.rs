use serde::{Deserialize, Serialize};

/// Named external stimulus fed into an agent each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sensor {
    DistLeft,
    DistRight,
    DistTop,
    DistBottom,
    DistNearestWall,
    LeftMovable,
    RightMovable,
    TopMovable,
    BottomMovable,
    TopLeftMovable,
    TopRightMovable,
    BottomLeftMovable,
    BottomRightMovable,
    Random,
    Age,
    PreviousMoveHorz,
    PreviousMoveVert,
    Sensitivity,
    Oscillator,
}

impl Sensor {
    /// Every sensor in binding order.
    pub const ALL: [Sensor; 19] = [
        Sensor::DistLeft,
        Sensor::DistRight,
        Sensor::DistTop,
        Sensor::DistBottom,
        Sensor::DistNearestWall,
        Sensor::LeftMovable,
        Sensor::RightMovable,
        Sensor::TopMovable,
        Sensor::BottomMovable,
        Sensor::TopLeftMovable,
        Sensor::TopRightMovable,
        Sensor::BottomLeftMovable,
        Sensor::BottomRightMovable,
        Sensor::Random,
        Sensor::Age,
        Sensor::PreviousMoveHorz,
        Sensor::PreviousMoveVert,
        Sensor::Sensitivity,
        Sensor::Oscillator,
    ];
}

/// Named behaviour read back from an agent each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveHorz,
    MoveVert,
    /// Declared but not bound by the default layout.
    MoveForward,
    SetSensitivity,
}
