//! Lets you load scenes from JSON5 files.
//!
//! A solar system file looks like this. Anything left out falls back to the
//! usual values (AU, years, solar masses):
//!
//! ```json5
//! {
//!     grav_constant: 39.478,
//!     dt: 0.01,
//!     speed: 5,
//!     balance_momentum: true,
//!     bodies: [
//!         { body: "sun", kinemat: { pos: [0, 0], vel: [0, 0] }, children: [
//!             { body: "earth", orbit: { distance: 1.0 } },
//!             { body: { name: "Vulcan", mass: 1e-7, radius: 6, color: 0xff8800 },
//!               orbit: { distance: 0.2, angle: 3.14, clockwise: true } },
//!         ] },
//!         { locus: [40, 0], children: [] },
//!     ],
//! }
//! ```
//!
//! A hexagon file looks like this:
//!
//! ```json5
//! {
//!     frame: { center: [400, 300], radius: 250, angular_speed: 0.5 },
//!     ball: { pos: [400, 200], vel: [100, 0], radius: 15, restitution: 0.9, friction: 0.2 },
//!     gravity: 500,
//! }
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;

/// A Vector2D or Point2D.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

/// A point in space with children in relation to it.
/// Untagged, so the order here matters: the first one whose fields fit wins.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Locus {
        locus: Vec2D,
        #[serde(default)]
        children: Vec<Entry>,
    },
    Circular {
        body: Body,
        orbit: Orbit,
        #[serde(default)]
        children: Vec<Entry>,
    },
    Orbiter {
        body: Body,
        #[serde(default)]
        kinemat: Option<Kinemat>,
        /// Only ends up here if the orbit above didn't fit
        #[serde(default)]
        orbit: Option<IgnoredAny>,
        #[serde(default)]
        children: Vec<Entry>,
    },
}

/// A Body in space
#[derive(Deserialize)]
#[serde(untagged)]
enum Body {
    Prefab(String), // A pre-made pre-defined Body
    Custom {
        name: String,
        mass: f64,
        radius: f64,
        color: u32,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Kinemat {
    pos: Vec2D,
    vel: Vec2D,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Orbit {
    distance: f64,
    #[serde(default)]
    angle: f64,
    #[serde(default)]
    clockwise: bool,
}

#[derive(Deserialize)]
struct RawSolarSystem {
    #[serde(default)]
    grav_constant: Option<f64>,
    #[serde(default)]
    dt: Option<f64>,
    #[serde(default)]
    speed: Option<u32>,
    #[serde(default = "get_true_for_serde")]
    balance_momentum: bool,
    bodies: Vec<Entry>,
}

/// Returns `true` because Serde needs a function
fn get_true_for_serde() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFrame {
    center: Vec2D,
    radius: f64,
    #[serde(default)]
    angle: f64,
    angular_speed: f64,
    #[serde(default)]
    sides: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBall {
    pos: Vec2D,
    vel: Vec2D,
    radius: f64,
    restitution: f64,
    friction: f64,
}

#[derive(Deserialize)]
struct RawHexagon {
    frame: RawFrame,
    ball: RawBall,
    gravity: f64,
    #[serde(default)]
    resolve_passes: Option<usize>,
}

use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
use crate::error::LoadError;
use crate::scene::{HexagonScene, SolarScene};
use euclid::default::{Point2D, Vector2D};
use log::info;
use simulator::ball::RigidBall;
use simulator::bodies;
use simulator::polygon::{RotatingFrame, HEXAGON_SIDES};

/// Loads a file and returns the ingredients for a solar system.
pub fn load_solar(contents: &str) -> Result<SolarScene, LoadError> {
    let raw: RawSolarSystem = json5::from_str(contents)?;
    if raw.bodies.is_empty() {
        return Err(LoadError::Invalid("a solar system needs at least one body".to_string()));
    }

    let grav_constant = raw.grav_constant.unwrap_or(simulator::GRAV_CONSTANT);
    let dt = raw.dt.unwrap_or(simulator::BASE_DT);
    check_positive("grav_constant", grav_constant)?;
    check_positive("dt", dt)?;
    let speed = raw.speed.unwrap_or(simulator::DEFAULT_SPEED);
    if speed == 0 {
        return Err(LoadError::Invalid("speed must be at least 1".to_string()));
    }

    let mut builder = SolarSystemBuilder::new().with_grav_constant(grav_constant);
    for root in raw.bodies {
        builder.add(do_one_level(root)?);
    }
    let orbiters = builder.construct();
    if orbiters.is_empty() {
        return Err(LoadError::Invalid("a solar system needs at least one body".to_string()));
    }
    info!("loaded a solar system with {} bodies", orbiters.len());

    Ok(SolarScene {
        orbiters,
        grav_constant,
        dt,
        speed,
        balance_momentum: raw.balance_momentum,
    })
}

/// Loads a file and returns the ingredients for the bouncing ball.
pub fn load_hexagon(contents: &str) -> Result<HexagonScene, LoadError> {
    let raw: RawHexagon = json5::from_str(contents)?;
    let RawHexagon {
        frame,
        ball,
        gravity,
        resolve_passes,
    } = raw;

    check_positive("frame radius", frame.radius)?;
    check_positive("ball radius", ball.radius)?;
    check_unit("restitution", ball.restitution)?;
    check_unit("friction", ball.friction)?;
    let sides = frame.sides.unwrap_or(HEXAGON_SIDES);
    if sides < 3 {
        return Err(LoadError::Invalid(format!("a polygon needs at least 3 sides, not {}", sides)));
    }

    let mut scene = HexagonScene::new(
        RotatingFrame {
            center: Point2D::new(frame.center.0, frame.center.1),
            radius: frame.radius,
            angle: frame.angle,
            angular_speed: frame.angular_speed,
            sides,
        },
        RigidBall::new(
            Point2D::new(ball.pos.0, ball.pos.1),
            Vector2D::new(ball.vel.0, ball.vel.1),
            ball.radius,
            ball.restitution,
            ball.friction,
        ),
        gravity,
    );
    if let Some(passes) = resolve_passes {
        if passes == 0 {
            return Err(LoadError::Invalid("resolve_passes must be at least 1".to_string()));
        }
        scene.resolve_passes = passes;
    }
    info!("loaded a {}-sided arena", sides);
    Ok(scene)
}

/// Helper function to DFS convert from serde to real
fn do_one_level(entry: Entry) -> Result<SSBE, LoadError> {
    let (ssbe, children) = match entry {
        Entry::Locus { locus, children } => (SSBE::new_locus(Point2D::new(locus.0, locus.1)), children),
        Entry::Circular {
            body,
            orbit,
            children,
        } => {
            check_positive("orbit distance", orbit.distance)?;
            (
                SSBE::Circular {
                    body: make_body(body)?,
                    distance: orbit.distance,
                    angle: orbit.angle,
                    clockwise: orbit.clockwise,
                    children: Vec::new(),
                },
                children,
            )
        }
        Entry::Orbiter {
            body,
            kinemat,
            orbit,
            children,
        } => {
            if orbit.is_some() {
                return Err(LoadError::Invalid(
                    "orbit needs a distance, and only distance, angle and clockwise".to_string(),
                ));
            }
            let kmat = match kinemat {
                Some(k) => bodies::Kinemat::new(
                    Point2D::new(k.pos.0, k.pos.1),
                    Vector2D::new(k.vel.0, k.vel.1),
                ),
                None => bodies::Kinemat::zero(),
            };
            (SSBE::new_parts(make_body(body)?, kmat), children)
        }
    };

    let kids = children
        .into_iter()
        .map(do_one_level)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ssbe.add_bulk(kids.into_iter()))
}

fn make_body(body: Body) -> Result<bodies::Body, LoadError> {
    let body = match body {
        Body::Prefab(id) => get_body_from_id(&id)?,
        Body::Custom {
            name,
            mass,
            radius,
            color,
        } => bodies::Body {
            name,
            mass,
            radius,
            color,
        },
    };
    check_positive(&format!("mass of {}", body.name), body.mass)?;
    check_positive(&format!("radius of {}", body.name), body.radius)?;
    Ok(body)
}

fn check_positive(what: &str, value: f64) -> Result<(), LoadError> {
    // Written this way round so NaN fails too
    if value > 0.0 {
        Ok(())
    } else {
        Err(LoadError::Invalid(format!("{} must be positive, got {}", what, value)))
    }
}

fn check_unit(what: &str, value: f64) -> Result<(), LoadError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LoadError::Invalid(format!("{} must be between 0 and 1, got {}", what, value)))
    }
}

/// Gets a premade Body from a string
fn get_body_from_id(id: &str) -> Result<bodies::Body, LoadError> {
    use crate::prefabs;
    use std::collections::HashMap;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<&'static str, fn() -> bodies::Body> = HashMap::new();
                $( h.insert(stringify!($name), prefabs::bodies::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref BODIES: HashMap<&'static str, fn() -> bodies::Body> = {
            let h = maker![
                sun,
                mercury,
                venus,
                earth,
                mars,
                jupiter,
                saturn,
                uranus,
                neptune
            ];

            h
        };
    }

    BODIES
        .get(id)
        .map(|make| make())
        .ok_or_else(|| LoadError::UnknownPrefab(id.to_string()))
}
