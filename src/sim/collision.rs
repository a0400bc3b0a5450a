//! Collision detection and response
//!
//! Every check works on *predicted* positions (position + velocity) and only
//! changes velocities, clamps or block state. Nothing here moves the ball;
//! `tick` advances positions once all checks have run, so a flip decided here
//! already applies to this tick's movement.
//!
//! The ball is treated as a square of half-size `radius`: it touches a
//! rectangle when its predicted center lies strictly inside the rectangle
//! inflated by the radius.

use super::rect::Rect;
use super::state::{Arena, Ball, Block, BlockHit, Paddle, Score};

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallBounce {
    /// Left or right wall (dx negated)
    Side,
    /// Lower edge of the score bar (dy negated)
    Top,
}

/// Which wall stopped the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleClamp {
    Left,
    Right,
}

/// A block the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContact {
    /// Index into the round's block list
    pub index: usize,
    pub hit: BlockHit,
}

/// Ball against the side walls and the top bar
///
/// At most one axis flips: a side hit returns before the top is checked.
/// The bottom edge is deliberately not a wall; crossing it ends the round.
pub fn ball_wall(ball: &mut Ball, arena: &Arena) -> Option<WallBounce> {
    let next = ball.predicted();

    if next.x < ball.radius || arena.width - ball.radius < next.x {
        ball.vel.x = -ball.vel.x;
        return Some(WallBounce::Side);
    }

    if next.y < ball.radius + arena.hud_height {
        ball.vel.y = -ball.vel.y;
        return Some(WallBounce::Top);
    }

    None
}

/// Predicted ball center strictly inside `rect` inflated by the ball radius
#[inline]
fn ball_touches(ball: &Ball, rect: &Rect) -> bool {
    rect.inflate(ball.radius).contains_strict(ball.predicted())
}

/// Ball against the paddle. Only dy is reflected; there is no de-penetration.
pub fn ball_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball_touches(ball, &paddle.bounds()) {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Paddle against the side walls: stop it and pin it to the wall
pub fn paddle_wall(paddle: &mut Paddle, arena: &Arena) -> Option<PaddleClamp> {
    let next = paddle.predicted_x();

    if next < 0.0 {
        paddle.dx = 0.0;
        paddle.pos.x = 0.0;
        Some(PaddleClamp::Left)
    } else if arena.width - paddle.width < next {
        paddle.dx = 0.0;
        paddle.pos.x = arena.width - paddle.width;
        Some(PaddleClamp::Right)
    } else {
        None
    }
}

/// Ball against every active block
///
/// The predicted point is taken once, before the loop, so a reflection from
/// one block does not change the point tested against the next. Every active
/// block is tested; two contacts in one tick flip dy twice.
pub fn ball_blocks(ball: &mut Ball, blocks: &mut [Block], score: &mut Score) -> Vec<BlockContact> {
    let next = ball.predicted();
    let radius = ball.radius;
    let mut contacts = Vec::new();

    for (index, block) in blocks.iter_mut().enumerate() {
        if !block.is_active() {
            continue;
        }
        if !block.rect.inflate(radius).contains_strict(next) {
            continue;
        }

        ball.vel.y = -ball.vel.y;

        let hit = block.hit();
        if let BlockHit::Destroyed { points } = hit {
            score.add(points);
        }
        contacts.push(BlockContact { index, hit });
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), 5.0)
    }

    #[test]
    fn test_ball_wall_left() {
        let arena = Arena::default();
        let mut b = ball(6.0, 200.0, -2.0, 2.0);
        assert_eq!(ball_wall(&mut b, &arena), Some(WallBounce::Side));
        assert_eq!(b.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_ball_wall_right() {
        let arena = Arena::default();
        let mut b = ball(474.0, 200.0, 2.0, 2.0);
        assert_eq!(ball_wall(&mut b, &arena), Some(WallBounce::Side));
        assert_eq!(b.vel.x, -2.0);
    }

    #[test]
    fn test_ball_wall_top_is_below_hud() {
        let arena = Arena::default();
        // 26 - 2 = 24 < 5 + 20
        let mut b = ball(200.0, 26.0, 2.0, -2.0);
        assert_eq!(ball_wall(&mut b, &arena), Some(WallBounce::Top));
        assert_eq!(b.vel, Vec2::new(2.0, 2.0));

        // 28 - 2 = 26, clear of the bar
        let mut b = ball(200.0, 28.0, 2.0, -2.0);
        assert_eq!(ball_wall(&mut b, &arena), None);
    }

    #[test]
    fn test_ball_wall_corner_flips_only_dx() {
        let arena = Arena::default();
        let mut b = ball(6.0, 26.0, -2.0, -2.0);
        assert_eq!(ball_wall(&mut b, &arena), Some(WallBounce::Side));
        assert_eq!(b.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_ball_wall_bottom_not_reflected() {
        let arena = Arena::default();
        let mut b = ball(200.0, 476.0, 2.0, 2.0);
        assert_eq!(ball_wall(&mut b, &arena), None);
        assert_eq!(b.vel.y, 2.0);
    }

    #[test]
    fn test_ball_paddle_hit_flips_dy_only() {
        let paddle = Paddle::default(); // (30, 460) 40x4
        let mut b = ball(36.0, 454.0, 2.0, 2.0);
        assert!(ball_paddle(&mut b, &paddle));
        assert_eq!(b.vel, Vec2::new(2.0, -2.0));
        // Position untouched
        assert_eq!(b.pos, Vec2::new(36.0, 454.0));
    }

    #[test]
    fn test_ball_paddle_miss() {
        let paddle = Paddle::default();
        let mut b = ball(200.0, 454.0, 2.0, 2.0);
        assert!(!ball_paddle(&mut b, &paddle));
        assert_eq!(b.vel.y, 2.0);

        // Predicted center exactly on the inflated edge is a miss: 25 is not > 25
        let mut b = ball(23.0, 460.0, 2.0, 0.0);
        assert!(!ball_paddle(&mut b, &paddle));
    }

    #[test]
    fn test_paddle_wall_left_clamp() {
        let arena = Arena::default();
        let mut paddle = Paddle::default();
        paddle.pos.x = 3.0;
        paddle.dx = -5.0;
        assert_eq!(paddle_wall(&mut paddle, &arena), Some(PaddleClamp::Left));
        assert_eq!(paddle.pos.x, 0.0);
        assert_eq!(paddle.dx, 0.0);
    }

    #[test]
    fn test_paddle_wall_right_clamp() {
        let arena = Arena::default();
        let mut paddle = Paddle::default();
        paddle.pos.x = 437.0;
        paddle.dx = 5.0;
        assert_eq!(paddle_wall(&mut paddle, &arena), Some(PaddleClamp::Right));
        assert_eq!(paddle.pos.x, 440.0);
        assert_eq!(paddle.dx, 0.0);
    }

    #[test]
    fn test_paddle_wall_free_movement() {
        let arena = Arena::default();
        let mut paddle = Paddle::default();
        paddle.dx = 5.0;
        assert_eq!(paddle_wall(&mut paddle, &arena), None);
        assert_eq!(paddle.dx, 5.0);
    }

    #[test]
    fn test_ball_blocks_standard_hit() {
        let mut blocks = vec![Block::standard(10.0, 40.0, 52.0, 20.0)];
        let mut score = Score::default();
        // Predicted (30, 62): inside (5..67, 35..65)
        let mut b = ball(32.0, 64.0, -2.0, -2.0);

        let contacts = ball_blocks(&mut b, &mut blocks, &mut score);
        assert_eq!(
            contacts,
            vec![BlockContact {
                index: 0,
                hit: BlockHit::Destroyed { points: 10 }
            }]
        );
        assert_eq!(b.vel, Vec2::new(-2.0, 2.0));
        assert_eq!(b.pos, Vec2::new(32.0, 64.0));
        assert!(!blocks[0].is_active());
        assert_eq!(score.value(), 10);
    }

    #[test]
    fn test_ball_blocks_skips_inactive() {
        let mut blocks = vec![Block::standard(10.0, 40.0, 52.0, 20.0)];
        let mut score = Score::default();
        blocks[0].hit();

        let mut b = ball(32.0, 64.0, -2.0, -2.0);
        let contacts = ball_blocks(&mut b, &mut blocks, &mut score);
        assert!(contacts.is_empty());
        assert_eq!(b.vel.y, -2.0);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_ball_blocks_hard_hit_no_score_until_destroyed() {
        let mut blocks = vec![Block::hard(196.0, 130.0, 52.0, 20.0)];
        let mut score = Score::default();
        let mut b = ball(220.0, 154.0, 0.0, -2.0);

        let contacts = ball_blocks(&mut b, &mut blocks, &mut score);
        assert_eq!(contacts[0].hit, BlockHit::Damaged { hp_left: 2 });
        assert!(blocks[0].is_active());
        assert_eq!(score.value(), 0);
        assert_eq!(b.vel.y, 2.0);
    }

    #[test]
    fn test_ball_blocks_double_contact_flips_twice() {
        // Two overlapping blocks both contain the predicted point
        let mut blocks = vec![
            Block::standard(10.0, 40.0, 52.0, 20.0),
            Block::standard(20.0, 45.0, 52.0, 20.0),
        ];
        let mut score = Score::default();
        let mut b = ball(32.0, 54.0, 0.0, -2.0);

        let contacts = ball_blocks(&mut b, &mut blocks, &mut score);
        assert_eq!(contacts.len(), 2);
        assert_eq!(b.vel.y, -2.0);
        assert_eq!(score.value(), 20);
    }
}
