use minimax_chess::game::Game;

fn main() {
    env_logger::init();

    // Human takes White, the engine answers for Black
    let mut game = Game::new([false, true]);
    game.play_game();
}
