//! The Playing screen: one round of Breakout

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::GamePhase;
use crate::Playfield;
use crate::platform::{Frontend, TextAnchor};
use crate::renderer::Color;
use crate::sim::{Ball, Bricks, Lives, Paddle, Score, wall};

/// Font size for HUD text
pub const HUD_FONT_SIZE: u32 = 30;
/// Corner radius of the paddle
pub const PADDLE_CORNER_RADIUS: f32 = 3.0;
/// Width of the restart / to-title buttons
pub const DEAD_BUTTON_WIDTH: f32 = 150.0;

pub const RESTART_LABEL: &str = "ReStart";
pub const TO_TITLE_LABEL: &str = "ToTitle";

/// Entities of a round in progress. Built fresh every time Playing is entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingScreen {
    pub bricks: Bricks,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: Score,
    pub lives: Lives,
    pub playfield: Playfield,
}

impl PlayingScreen {
    pub fn start(playfield: Playfield, pointer_x: f32) -> Self {
        Self {
            bricks: Bricks::new(),
            ball: Ball::new(),
            paddle: Paddle::new(pointer_x),
            score: Score::new(),
            lives: Lives::new(),
            playfield,
        }
    }

    /// Run one frame: simulate, then draw. Returns the requested transition,
    /// the last request winning when several happen in one frame.
    pub fn update(&mut self, dt: f32, frontend: &mut impl Frontend) -> Option<GamePhase> {
        let cleared = self.step(dt, frontend.pointer().x);
        let chosen = self.draw(frontend);
        chosen.or(cleared)
    }

    /// Simulation half of the frame. Returns `GameClear` when the last brick fell.
    pub fn step(&mut self, dt: f32, pointer_x: f32) -> Option<GamePhase> {
        self.paddle.update(pointer_x);
        self.ball.update(dt);
        self.lives.update(&mut self.ball, &self.playfield);

        // Collisions, in order
        let hit = self
            .bricks
            .test_and_resolve(&mut self.ball, &mut self.score, &self.playfield);
        wall::test_and_resolve(&mut self.ball, &self.playfield);
        self.paddle.test_and_resolve(&mut self.ball);

        match hit {
            Some(hit) if hit.cleared => Some(GamePhase::GameClear),
            _ => None,
        }
    }

    pub fn is_ball_dead(&self) -> bool {
        self.ball.is_dead(&self.playfield)
    }

    /// Draw the round and, when the ball is gone, the restart / to-title buttons
    pub fn draw(&self, frontend: &mut impl Frontend) -> Option<GamePhase> {
        for rect in self.bricks.alive() {
            frontend.draw_rect(rect.stretched(-1.0), 0.0, Color::from_hue(rect.pos.y - 40.0));
        }
        frontend.draw_circle(self.ball.circle, Color::WHITE);
        frontend.draw_rect(self.paddle.rect, PADDLE_CORNER_RADIUS, Color::WHITE);

        frontend.draw_text(
            &self.score.label(),
            HUD_FONT_SIZE,
            Vec2::new(20.0, 0.0),
            TextAnchor::TopLeft,
            Color::WHITE,
        );
        frontend.draw_text(
            &self.lives.label(),
            HUD_FONT_SIZE,
            Vec2::new(20.0, 30.0),
            TextAnchor::TopLeft,
            Color::WHITE,
        );

        if !self.is_ball_dead() {
            return None;
        }

        let center = self.playfield.center();
        frontend.draw_text("Dead", HUD_FONT_SIZE, center, TextAnchor::Center, Color::WHITE);

        let x = center.x - DEAD_BUTTON_WIDTH / 2.0;
        let mut next = None;
        if frontend.button(RESTART_LABEL, Vec2::new(x, center.y + 50.0), DEAD_BUTTON_WIDTH) {
            next = Some(GamePhase::Playing);
        }
        if frontend.button(TO_TITLE_LABEL, Vec2::new(x, center.y + 100.0), DEAD_BUTTON_WIDTH) {
            next = Some(GamePhase::Title);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::{DrawCommand, HeadlessFrontend};

    const DT: f32 = 1.0 / 60.0;

    fn screen() -> PlayingScreen {
        PlayingScreen::start(Playfield::default(), 400.0)
    }

    #[test]
    fn test_fresh_round() {
        let screen = screen();
        assert_eq!(screen.score.points, 0);
        assert_eq!(screen.lives.remaining, INITIAL_LIVES);
        assert_eq!(screen.bricks.alive_count(), BRICK_COUNT);
        assert_eq!(screen.ball, Ball::new());
        assert_eq!(screen.paddle, Paddle::new(400.0));
    }

    #[test]
    fn test_step_moves_paddle_then_ball() {
        let mut screen = screen();
        assert_eq!(screen.step(DT, 250.0), None);
        assert_eq!(screen.paddle.rect.pos.x, 220.0);
        assert!((screen.ball.pos().y - (400.0 - BALL_SPEED * DT)).abs() < 1e-3);
    }

    #[test]
    fn test_ball_reaches_bricks() {
        let mut screen = screen();
        // Straight up from (400, 400): hits row 4 (y 140..160) after ~0.5 s
        let mut frames = 0;
        while screen.score.points == 0 && frames < 120 {
            screen.step(DT, 400.0);
            frames += 1;
        }
        assert_eq!(screen.score.points, BRICK_POINTS);
        assert!(screen.ball.vel.y > 0.0);
        // x = 400 touches columns 9 and 10 of the bottom row; the lower index wins
        assert!(!screen.bricks.is_alive(4 * BRICK_COLUMNS + 9));
        assert!(screen.bricks.is_alive(4 * BRICK_COLUMNS + 10));
        assert_eq!(screen.bricks.alive_count(), BRICK_COUNT - 1);
    }

    #[test]
    fn test_death_costs_a_life() {
        let mut screen = screen();
        screen.ball.circle.center = Vec2::new(100.0, 610.0);
        screen.ball.vel = Vec2::new(0.0, BALL_SPEED);

        screen.step(DT, 400.0);
        assert_eq!(screen.lives.remaining, 2);
        // Respawn comes after integration, so the new ball hasn't moved yet
        assert_eq!(screen.ball, Ball::new());
    }

    #[test]
    fn test_last_brick_requests_clear() {
        let mut screen = screen();
        let playfield = screen.playfield;
        for index in 1..BRICK_COUNT {
            screen.bricks.knock_out(index, &playfield);
        }
        screen.ball.circle.center = Vec2::new(20.0, 54.0);
        screen.ball.vel = Vec2::new(0.0, BALL_SPEED);

        assert_eq!(screen.step(0.0, 400.0), Some(GamePhase::GameClear));
        assert!(screen.bricks.is_all_dead());
    }

    #[test]
    fn test_draw_hud() {
        let screen = screen();
        let mut frontend = HeadlessFrontend::new(Vec2::new(400.0, 300.0));

        assert_eq!(screen.draw(&mut frontend), None);
        assert_eq!(frontend.texts(), vec!["Score: 0", "Ball: 3"]);
        assert!(frontend.buttons().is_empty());

        let rects = frontend
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { .. }))
            .count();
        // Every brick plus the paddle
        assert_eq!(rects, BRICK_COUNT + 1);

        // First brick: shrunk by one, hue 20
        assert_eq!(
            frontend.commands()[0],
            DrawCommand::Rect {
                rect: screen.bricks.rects()[0].stretched(-1.0),
                corner_radius: 0.0,
                color: Color::from_hue(20.0),
            }
        );
    }

    fn out_of_balls() -> PlayingScreen {
        let mut screen = screen();
        screen.lives.remaining = 0;
        screen.ball.circle.center = Vec2::new(100.0, 650.0);
        screen.ball.vel = Vec2::new(0.0, BALL_SPEED);
        screen
    }

    #[test]
    fn test_dead_screen() {
        let mut screen = out_of_balls();
        let mut frontend = HeadlessFrontend::default();

        assert_eq!(screen.update(DT, &mut frontend), None);
        assert!(screen.is_ball_dead());
        assert_eq!(screen.lives.remaining, 0);
        assert_eq!(frontend.texts(), vec!["Score: 0", "Ball: 0", "Dead"]);
        assert_eq!(frontend.buttons(), vec![RESTART_LABEL, TO_TITLE_LABEL]);
        assert!(frontend.commands().contains(&DrawCommand::Button {
            label: RESTART_LABEL.to_string(),
            pos: Vec2::new(325.0, 350.0),
            width: DEAD_BUTTON_WIDTH,
            clicked: false,
        }));
    }

    #[test]
    fn test_dead_screen_buttons() {
        let mut screen = out_of_balls();
        let mut frontend = HeadlessFrontend::default();
        frontend.click(RESTART_LABEL);
        assert_eq!(screen.update(DT, &mut frontend), Some(GamePhase::Playing));

        let mut screen = out_of_balls();
        frontend.begin_frame();
        frontend.click(TO_TITLE_LABEL);
        assert_eq!(screen.update(DT, &mut frontend), Some(GamePhase::Title));

        // Both in one frame: the later button wins
        let mut screen = out_of_balls();
        frontend.begin_frame();
        frontend.click(RESTART_LABEL);
        frontend.click(TO_TITLE_LABEL);
        assert_eq!(screen.update(DT, &mut frontend), Some(GamePhase::Title));
    }
}
