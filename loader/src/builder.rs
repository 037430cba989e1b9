//! Lets you construct solar systems with nested orbiting more easily.

use euclid::default::{Point2D, Vector2D};
use simulator::bodies::*;

/// Use this struct to construct a solar system easily
pub struct SolarSystemBuilder {
    /// The stuff in the solar system
    entries: Vec<SolarSystemBuilderEntry>,
    /// Used to work out circular orbit speeds
    grav_constant: f64,
}

impl SolarSystemBuilder {
    /// Make a new empty Builder.
    pub fn new() -> Self {
        SolarSystemBuilder {
            entries: Vec::new(),
            grav_constant: simulator::GRAV_CONSTANT,
        }
    }

    /// Circular orbits will be worked out with this G instead of the usual one.
    pub fn with_grav_constant(mut self, grav_constant: f64) -> Self {
        self.grav_constant = grav_constant;
        self
    }

    /// Add an entry to the Builder.
    pub fn add(&mut self, ssbe: SolarSystemBuilderEntry) -> &mut Self {
        self.entries.push(ssbe);
        self
    }

    /// Calculates the positions and velocities of all entries, and returns them as a Vec
    /// suitable for passing to SolarSystem::new().
    /// Parents always come before their children.
    pub fn construct(self) -> Vec<Orbiter> {
        let grav_constant = self.grav_constant;
        let mut out: Vec<Orbiter> = Vec::new();
        for base_entry in self.entries {
            // Always base it on (0, 0)
            out.append(&mut SolarSystemBuilder::construct_one_level(
                base_entry,
                grav_constant,
                0.0,
                Point2D::zero(),
                Vector2D::zero(),
            ));
        }
        out
    }

    /// Inner function for construct()'s recursion.
    fn construct_one_level(
        entry: SolarSystemBuilderEntry,
        grav_constant: f64,
        parent_mass: f64,
        parent_pos: Point2D<f64>,
        parent_vel: Vector2D<f64>,
    ) -> Vec<Orbiter> {
        use SolarSystemBuilderEntry as SSBE;
        let mut out: Vec<Orbiter> = Vec::new();

        let (orbiter, children) = match entry {
            SSBE::Orbit(Orbiter(body, kmat), children) => {
                let kmat = Kinemat::new(parent_pos + kmat.pos.to_vector(), parent_vel + kmat.vel);
                (Orbiter(body, kmat), children)
            }
            SSBE::Circular {
                body,
                distance,
                angle,
                clockwise,
                children,
            } => {
                let kmat = circular_orbit(grav_constant, parent_mass, distance, angle, clockwise);
                let kmat = Kinemat::new(parent_pos + kmat.pos.to_vector(), parent_vel + kmat.vel);
                (Orbiter(body, kmat), children)
            }
            SSBE::Locus(point, children) => {
                let pos = parent_pos + point.to_vector();
                for child in children {
                    out.append(&mut SolarSystemBuilder::construct_one_level(
                        child,
                        grav_constant,
                        0.0,
                        pos,
                        parent_vel,
                    ));
                }
                return out;
            }
        };

        let (mass, pos, vel) = (orbiter.0.mass, orbiter.1.pos, orbiter.1.vel);
        out.push(orbiter);
        for child in children {
            out.append(&mut SolarSystemBuilder::construct_one_level(
                child,
                grav_constant,
                mass,
                pos,
                vel,
            ));
        }
        out
    }
}

/// Where something `distance` away from a body of `parent_mass` would be,
/// and how fast it has to go to stay in a circle.
/// Only the parent's mass counts. Counter-clockwise unless told otherwise.
pub fn circular_orbit(
    grav_constant: f64,
    parent_mass: f64,
    distance: f64,
    angle: f64,
    clockwise: bool,
) -> Kinemat {
    let speed = (grav_constant * parent_mass / distance).sqrt() * if clockwise { -1.0 } else { 1.0 };
    // Velocity is a quarter turn ahead of the position
    Kinemat::new(
        Point2D::new(angle.cos(), angle.sin()) * distance,
        Vector2D::new(-angle.sin(), angle.cos()) * speed,
    )
}

/// One entry in a SolarSystemBuilder
pub enum SolarSystemBuilderEntry {
    /// Orbiters have an orbiter associated with them, and have children.
    /// The kinemat is relative to the parent.
    Orbit(Orbiter, Vec<SolarSystemBuilderEntry>),
    /// A body put on a circular orbit around its parent.
    Circular {
        body: Body,
        distance: f64,
        /// Where on the circle it starts, radians from +x
        angle: f64,
        clockwise: bool,
        children: Vec<SolarSystemBuilderEntry>,
    },
    /// Loci only consider the position, and no Orbiter is added to the SolarSystem because of it.
    /// Still has children.
    Locus(Point2D<f64>, Vec<SolarSystemBuilderEntry>),
}

impl SolarSystemBuilderEntry {
    /// Create a new SolarSystemBuilderEntry::Orbit from a Body and a Kinemat
    pub fn new_parts(body: Body, kmat: Kinemat) -> SolarSystemBuilderEntry {
        SolarSystemBuilderEntry::Orbit(Orbiter(body, kmat), Vec::new())
    }

    /// Create a new SolarSystemBuilderEntry::Circular starting on the parent's +x side.
    pub fn new_circular(body: Body, distance: f64) -> SolarSystemBuilderEntry {
        SolarSystemBuilderEntry::Circular {
            body,
            distance,
            angle: 0.0,
            clockwise: false,
            children: Vec::new(),
        }
    }

    /// Create a new SolarSystemBuilderEntry::Locus
    /// This can be useful if you want to center things around a locus
    /// without attaching a body.
    pub fn new_locus(pos: Point2D<f64>) -> SolarSystemBuilderEntry {
        SolarSystemBuilderEntry::Locus(pos, Vec::new())
    }

    fn children_mut(&mut self) -> &mut Vec<SolarSystemBuilderEntry> {
        match self {
            SolarSystemBuilderEntry::Orbit(_, kids) => kids,
            SolarSystemBuilderEntry::Circular { children, .. } => children,
            SolarSystemBuilderEntry::Locus(_, kids) => kids,
        }
    }

    /// Add another SolarSystemBuilderEntry as a child of this one.
    /// Returns itself so you can keep chaining it.
    pub fn add(mut self, child: Self) -> Self {
        self.children_mut().push(child);
        self
    }

    /// Add a whole bunch of SolarSystemBuilderEntries as children of this one.
    /// Consumes the children.
    pub fn add_bulk<T: Iterator<Item = Self>>(mut self, new_children: T) -> Self {
        self.children_mut().extend(new_children);
        self
    }
}
