//! Immutable scene graph of primitive solids.
//!
//! A [`SceneNode`] is either a mesh (one [`Primitive`] tagged with the
//! conveyor [`Part`] it represents) or a group of child nodes. Every node
//! carries a local [`Transform`]; world placement is the product of the
//! transforms on the path from the root.

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A primitive solid centred on its local origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// Axis-aligned box of the given extents.
    Box { width: f64, height: f64, depth: f64 },
    /// Cylinder whose axis runs along local Y.
    #[serde(rename_all = "camelCase")]
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: u32,
    },
}

impl Primitive {
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    pub fn cylinder(radius: f64, height: f64, radial_segments: u32) -> Self {
        Self::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            radial_segments,
        }
    }

    /// Half extents of the local bounding box.
    ///
    /// Cylinders are bounded by the larger of their two radii in X and Z.
    pub fn half_extents(&self) -> Vector3<f64> {
        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => Vector3::new(width / 2.0, height / 2.0, depth / 2.0),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(radius_bottom);
                Vector3::new(r, height / 2.0, r)
            }
        }
    }
}

/// What a mesh represents in the conveyor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    Frame,
    Roller,
    Leg,
    Brace,
    Motor,
    Track,
    Trolley,
    Wheel,
    DropRod,
    Carrier,
    DriveUnit,
    Column,
}

/// Local placement: translation plus XYZ Euler rotation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
}

impl Transform {
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: [x, y, z],
            rotation: [0.0; 3],
        }
    }

    pub fn rotated(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotation = [x, y, z];
        self
    }

    /// Rigid transform equivalent to this placement.
    ///
    /// The rotation is applied as `Rx · Ry · Rz`, so Z rotates first in the
    /// local frame.
    pub fn isometry(&self) -> Isometry3<f64> {
        let [x, y, z] = self.rotation;
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), x)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), y)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), z);
        let [px, py, pz] = self.position;
        Isometry3::from_parts(Translation3::new(px, py, pz), rotation)
    }
}

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    fn from_point(p: &Point3<f64>) -> Self {
        Self {
            min: [p.x, p.y, p.z],
            max: [p.x, p.y, p.z],
        }
    }

    fn include(&mut self, p: &Point3<f64>) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(p[axis]);
            self.max[axis] = self.max[axis].max(p[axis]);
        }
    }

    pub fn union(mut self, other: &Aabb) -> Self {
        self.include(&Point3::from(other.min));
        self.include(&Point3::from(other.max));
        self
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Bounds of a primitive placed by `world`: the eight local corners
    /// transformed and re-boxed.
    pub fn of_primitive(primitive: &Primitive, world: &Isometry3<f64>) -> Self {
        let h = primitive.half_extents();
        let mut corners = [-1.0, 1.0].into_iter().flat_map(|sx| {
            [-1.0, 1.0].into_iter().flat_map(move |sy| {
                [-1.0, 1.0]
                    .into_iter()
                    .map(move |sz| Point3::new(sx * h.x, sy * h.y, sz * h.z))
            })
        });
        let first = world.transform_point(&corners.next().unwrap_or_else(Point3::origin));
        let mut aabb = Self::from_point(&first);
        for corner in corners {
            aabb.include(&world.transform_point(&corner));
        }
        aabb
    }
}

/// Mesh or group payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeContent {
    Mesh { primitive: Primitive, part: Part },
    Group { children: Vec<SceneNode> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    #[serde(flatten)]
    pub content: NodeContent,
}

/// A primitive with its accumulated world transform.
#[derive(Debug, Clone)]
pub struct PlacedPrimitive {
    pub name: String,
    pub part: Part,
    pub primitive: Primitive,
    pub world: Isometry3<f64>,
}

impl SceneNode {
    pub fn mesh(
        name: impl Into<String>,
        primitive: Primitive,
        part: Part,
        transform: Transform,
    ) -> Self {
        Self {
            name: name.into(),
            transform,
            content: NodeContent::Mesh { primitive, part },
        }
    }

    pub fn group(name: impl Into<String>, transform: Transform, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.into(),
            transform,
            content: NodeContent::Group { children },
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.content {
            NodeContent::Group { children } => children,
            NodeContent::Mesh { .. } => &[],
        }
    }

    /// Every primitive in the subtree placed in world space.
    pub fn world_primitives(&self) -> Vec<PlacedPrimitive> {
        let mut out = Vec::new();
        self.collect(&Isometry3::identity(), &mut out);
        out
    }

    fn collect(&self, parent: &Isometry3<f64>, out: &mut Vec<PlacedPrimitive>) {
        let world = parent * self.transform.isometry();
        match &self.content {
            NodeContent::Mesh { primitive, part } => out.push(PlacedPrimitive {
                name: self.name.clone(),
                part: *part,
                primitive: *primitive,
                world,
            }),
            NodeContent::Group { children } => {
                for child in children {
                    child.collect(&world, out);
                }
            }
        }
    }

    /// World bounding box of the subtree, `None` when it holds no meshes.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.world_primitives()
            .iter()
            .map(|p| Aabb::of_primitive(&p.primitive, &p.world))
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn count_parts(&self, part: Part) -> usize {
        match &self.content {
            NodeContent::Mesh { part: p, .. } => usize::from(*p == part),
            NodeContent::Group { children } => children.iter().map(|c| c.count_parts(part)).sum(),
        }
    }

    pub fn mesh_count(&self) -> usize {
        match &self.content {
            NodeContent::Mesh { .. } => 1,
            NodeContent::Group { children } => children.iter().map(SceneNode::mesh_count).sum(),
        }
    }

    /// Depth-first search by node name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }
}
