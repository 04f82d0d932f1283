fn main() -> anyhow::Result<()> {
    arena_coach_lib::run()
}
