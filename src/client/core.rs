use sdl3::Sdl;
use sdl3::pixels::Color;
use sdl3::render::{Canvas, FRect, TextureCreator};
use sdl3::video::{Window, WindowContext};

use crate::client::assets::{Asset, TextureSet};
use crate::client::input::{Input, InputState};
use crate::error::{AppError, Result};
use crate::game::{Flash, Game};
use crate::options::GameOptions;
use crate::utils::Timestep;

/// Core of the client application. Owns every SDL handle; fields drop in declaration order.
pub struct ClientCore {
    creator: TextureCreator<WindowContext>, // Creates textures bound to the canvas.
    canvas: Canvas<Window>,                 // Canvas to draw on.
    sdl: Sdl,                               // SDL context.
    options: GameOptions,                   // Session tunables.
}

impl ClientCore {
    const TITLE: &'static str = "Block Mover";

    /// Creates a new client core by initializing the SDL context and creating a window.
    pub fn new(options: GameOptions) -> Result<Self> {
        options.validate()?;

        let sdl = sdl3::init().map_err(AppError::init)?;
        let video = sdl.video().map_err(AppError::init)?;

        let window = video
            .window(Self::TITLE, options.area.width, options.area.height)
            .position_centered()
            .build()
            .map_err(AppError::init)?;

        let canvas = window.into_canvas();
        let creator = canvas.texture_creator();

        Ok(Self {
            creator,
            canvas,
            sdl,
            options,
        })
    }

    /// Runs the main loop until the window is closed.
    pub fn run(&mut self) -> Result<()> {
        // Textures borrow the creator, so they are released before it on every exit path.
        // Drawing goes through `self.canvas` directly to keep that borrow disjoint.
        let textures = TextureSet::load(&self.creator, &self.options.asset_dir)?;
        let mut event_pump = self.sdl.event_pump().map_err(AppError::init)?;

        let (r, g, b) = self.options.background;
        self.canvas.set_draw_color(Color::RGB(r, g, b));

        let mut game = Game::new(&self.options);
        let mut input_state = InputState::new();
        let mut timestep = Timestep::new(self.options.frame_rate);
        let window_id = self.canvas.window().id();

        log::info!(
            "Playing on a {}x{} area, target at ({}, {}).",
            game.area().width,
            game.area().height,
            game.target().x,
            game.target().y
        );

        'game_loop: loop {
            input_state.get_input(&mut event_pump, window_id);
            for input in &input_state.events {
                match input {
                    Input::Quit => break 'game_loop,
                    Input::Move(direction) => game.apply(*direction),
                }
            }

            Self::render(&mut self.canvas, &game, &textures);

            if let Some(flash) = game.resolve() {
                let asset = match flash {
                    Flash::Success => Asset::SuccessFlash,
                    Flash::Error => Asset::ErrorFlash,
                };

                log::debug!("{flash:?} flash, state {:?}.", game.state());
                Self::draw(&mut self.canvas, &textures, asset, None);
                self.canvas.present();
                std::thread::sleep(self.options.flash_hold());

                game.finish_flash();
                timestep.reset();
            }

            timestep.wait();
        }

        log::info!("Window closed after {} frames.", timestep.frame());
        Ok(())
    }

    /// Clears the canvas and draws both squares.
    fn render(canvas: &mut Canvas<Window>, game: &Game, textures: &TextureSet<'_>) {
        canvas.clear();
        Self::draw(canvas, textures, Asset::Mover, Some((*game.mover()).into()));
        Self::draw(canvas, textures, Asset::Target, Some((*game.target()).into()));
        canvas.present();
    }

    /// Copies an asset to the canvas. None stretches it across the whole window.
    fn draw(
        canvas: &mut Canvas<Window>,
        textures: &TextureSet<'_>,
        asset: Asset,
        dest: Option<FRect>,
    ) {
        if let Err(why) = canvas.copy(textures.get(asset), None::<FRect>, dest) {
            log::warn!("Failed to draw {asset:?}: {why}");
        }
    }
}
