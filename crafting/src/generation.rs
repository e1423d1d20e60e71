use crate::math::Pos;
use crate::model::{ENERGITE, MATTERITE};
use crate::spirits::{SpiritError, SpiritId};
use crate::Game;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

impl Game {
    /// Empty world with resources scattered by seeded generator.
    pub fn generate_world(&mut self) -> Result<SpiritId, SpiritError> {
        let settings = &self.settings;
        let (width, height) = (settings.world_width, settings.world_height);
        let density = settings.resource_density.clamp(0.0, 1.0);
        let mut random = StdRng::seed_from_u64(settings.world_seed);
        let world = self.spirits.create_world(width, height);
        let mut resources = 0;
        for y in 0..height {
            for x in 0..width {
                if !random.gen_bool(density) {
                    continue;
                }
                let serial_integer = if random.gen_bool(0.7) {
                    MATTERITE
                } else {
                    ENERGITE
                };
                let tile = self.known.simple_tile(serial_integer);
                if let Some(tile) = tile {
                    self.spirits.set_tile(world, Pos::new(x, y), tile)?;
                    resources += 1;
                }
            }
        }
        info!(
            "Generate world {}x{} with {} resources",
            width, height, resources
        );
        Ok(world)
    }
}
