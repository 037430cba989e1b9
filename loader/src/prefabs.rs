//! Prefabricated bodies and scenes.

pub mod bodies {
    //! Masses in solar masses. Radii are how many pixels to draw them, not how big they are.
    use simulator::bodies::Body;

    fn body(name: &str, mass: f64, radius: f64, color: u32) -> Body {
        Body {
            name: name.to_string(),
            mass,
            radius,
            color,
        }
    }

    /// Returns our Sun.
    pub fn sun() -> Body {
        body("Sun", 1.0, 20.0, 0xFFFF00)
    }

    pub fn mercury() -> Body {
        body("Mercury", 1.65e-7, 8.0, 0x969696)
    }

    pub fn venus() -> Body {
        body("Venus", 2.45e-6, 10.0, 0xFFA500)
    }

    /// Returns the Earth.
    pub fn earth() -> Body {
        body("Earth", 3.0e-6, 12.0, 0x0000FF)
    }

    pub fn mars() -> Body {
        body("Mars", 3.3e-7, 9.0, 0xFF0000)
    }

    pub fn jupiter() -> Body {
        body("Jupiter", 9.5e-4, 15.0, 0xFFD700)
    }

    pub fn saturn() -> Body {
        body("Saturn", 2.75e-4, 14.0, 0xD2B48C)
    }

    pub fn uranus() -> Body {
        body("Uranus", 4.4e-5, 13.0, 0xADD8E6)
    }

    pub fn neptune() -> Body {
        body("Neptune", 5.15e-5, 13.0, 0x000096)
    }
}

pub mod systems {
    use super::bodies;
    use crate::builder::{SolarSystemBuilder, SolarSystemBuilderEntry as SSBE};
    use crate::scene::SolarScene;
    use simulator::bodies::Kinemat;

    /// Our solar system: the Sun and eight planets lined up on the +x axis,
    /// each on a circular orbit at its semi-major axis (AU).
    pub fn ours() -> SolarScene {
        let planets = vec![
            (bodies::mercury(), 0.387),
            (bodies::venus(), 0.723),
            (bodies::earth(), 1.0),
            (bodies::mars(), 1.524),
            (bodies::jupiter(), 5.2),
            (bodies::saturn(), 9.5),
            (bodies::uranus(), 19.2),
            (bodies::neptune(), 30.1),
        ];

        let mut builder = SolarSystemBuilder::new();
        builder.add(
            SSBE::new_parts(bodies::sun(), Kinemat::zero()).add_bulk(
                planets
                    .into_iter()
                    .map(|(body, distance)| SSBE::new_circular(body, distance)),
            ),
        );

        SolarScene {
            orbiters: builder.construct(),
            grav_constant: simulator::GRAV_CONSTANT,
            dt: simulator::BASE_DT,
            speed: simulator::DEFAULT_SPEED,
            balance_momentum: true,
        }
    }
}

pub mod arenas {
    use crate::scene::HexagonScene;
    use euclid::default::{Point2D, Vector2D};
    use simulator::ball::RigidBall;
    use simulator::polygon::RotatingFrame;

    /// An 800x600 window with a hexagon spinning in the middle
    /// and a ball dropped a little above center.
    pub fn spinning_hexagon() -> HexagonScene {
        HexagonScene::new(
            RotatingFrame::hexagon(Point2D::new(400.0, 300.0), 250.0, 0.5),
            RigidBall::new(
                Point2D::new(400.0, 200.0),
                Vector2D::new(100.0, 0.0),
                15.0,
                0.9,
                0.2,
            ),
            500.0,
        )
    }
}
