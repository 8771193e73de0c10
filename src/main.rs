fn main() {
    concept_extract::cli::run();
}
