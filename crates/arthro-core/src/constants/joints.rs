// ABOUTME: Joint identifiers, display labels, and body regions for the symptom body map
// ABOUTME: Static table used to summarize per-joint symptoms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Joints the journal can record symptoms for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Shoulder joints
    Shoulders,
    /// Elbow joints
    Elbows,
    /// Wrists
    Wrists,
    /// Finger joints
    Fingers,
    /// Cervical spine
    Neck,
    /// Thoracic and lumbar spine
    Spine,
    /// Hip joints
    Hips,
    /// Knee joints
    Knees,
    /// Ankles
    Ankles,
    /// Toe joints
    Toes,
}

/// Body region a joint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Shoulders down to the fingers
    UpperLimb,
    /// Neck and spine
    Trunk,
    /// Hips down to the toes
    LowerLimb,
}

/// Static description of one joint area
#[derive(Debug, Clone, Copy)]
pub struct JointArea {
    /// Joint this entry describes
    pub joint: Joint,
    /// Identifier used as the key in journal records
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Body region
    pub region: BodyRegion,
}

/// All joint areas in body-map order
pub const JOINT_AREAS: [JointArea; 10] = [
    JointArea {
        joint: Joint::Shoulders,
        id: "shoulders",
        label: "Shoulders",
        region: BodyRegion::UpperLimb,
    },
    JointArea {
        joint: Joint::Elbows,
        id: "elbows",
        label: "Elbows",
        region: BodyRegion::UpperLimb,
    },
    JointArea {
        joint: Joint::Wrists,
        id: "wrists",
        label: "Wrists",
        region: BodyRegion::UpperLimb,
    },
    JointArea {
        joint: Joint::Fingers,
        id: "fingers",
        label: "Finger joints",
        region: BodyRegion::UpperLimb,
    },
    JointArea {
        joint: Joint::Neck,
        id: "neck",
        label: "Neck",
        region: BodyRegion::Trunk,
    },
    JointArea {
        joint: Joint::Spine,
        id: "spine",
        label: "Spine",
        region: BodyRegion::Trunk,
    },
    JointArea {
        joint: Joint::Hips,
        id: "hips",
        label: "Hips",
        region: BodyRegion::LowerLimb,
    },
    JointArea {
        joint: Joint::Knees,
        id: "knees",
        label: "Knees",
        region: BodyRegion::LowerLimb,
    },
    JointArea {
        joint: Joint::Ankles,
        id: "ankles",
        label: "Ankles",
        region: BodyRegion::LowerLimb,
    },
    JointArea {
        joint: Joint::Toes,
        id: "toes",
        label: "Toe joints",
        region: BodyRegion::LowerLimb,
    },
];

impl Joint {
    /// Look up a joint by the identifier used in journal records
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        JOINT_AREAS
            .iter()
            .find(|area| area.id == id)
            .map(|area| area.joint)
    }

    /// Static table entry for this joint
    #[must_use]
    pub fn area(self) -> &'static JointArea {
        // JOINT_AREAS is indexed in declaration order
        &JOINT_AREAS[self as usize]
    }

    /// Identifier used as the key in journal records
    #[must_use]
    pub fn id(self) -> &'static str {
        self.area().id
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        self.area().label
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
