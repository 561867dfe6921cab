fn main() -> anyhow::Result<()> {
    word_clock_lib::run()
}
