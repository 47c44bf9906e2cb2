use std::{io, thread, time::Duration};

use log::info;
use universe::Universe;

use crate::render::Renderer;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub delay: Duration,
    /// Stop after this many frames; run forever when unset.
    pub generations: Option<usize>,
}

/// Renders `universe` and its successors, pausing `options.delay` after each frame.
pub fn run(universe: Universe, renderer: &mut impl Renderer, options: Options) -> io::Result<()> {
    let limit = options.generations.unwrap_or(usize::MAX);
    let mut extinct = false;
    for (generation, universe) in universe.generations().enumerate().take(limit) {
        renderer.render(&universe, generation)?;
        if universe.is_extinct() && !extinct {
            info!("population died out at generation {generation}");
            extinct = true;
        }
        if generation + 1 < limit {
            thread::sleep(options.delay);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use universe::Coordinate;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, usize)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, universe: &Universe, generation: usize) -> io::Result<()> {
            self.frames.push((generation, universe.population()));
            Ok(())
        }
    }

    #[test]
    fn test_runs_limited_generations() {
        // A lone cell dies after the first frame and the universe stays empty.
        let universe = Universe::create(4, [Coordinate::new(1, 1)]).unwrap();
        let mut recorder = Recorder::default();
        let options = Options {
            delay: Duration::ZERO,
            generations: Some(3),
        };
        run(universe, &mut recorder, options).unwrap();
        assert_eq!(recorder.frames, [(0, 1), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_no_pause_after_last_frame() {
        let universe = Universe::create(4, [Coordinate::new(1, 1)]).unwrap();
        let mut recorder = Recorder::default();
        let options = Options {
            delay: Duration::from_secs(60),
            generations: Some(1),
        };
        let started = Instant::now();
        run(universe, &mut recorder, options).unwrap();
        assert!(started.elapsed() < Duration::from_secs(30));
        assert_eq!(recorder.frames, [(0, 1)]);
    }

    #[test]
    fn test_render_error_stops_run() {
        struct Broken;
        impl Renderer for Broken {
            fn render(&mut self, _: &Universe, _: usize) -> io::Result<()> {
                Err(io::Error::other("closed"))
            }
        }
        let universe = Universe::create(4, [Coordinate::new(1, 1)]).unwrap();
        let options = Options {
            delay: Duration::ZERO,
            generations: None,
        };
        assert!(run(universe, &mut Broken, options).is_err());
    }
}
