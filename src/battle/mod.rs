pub mod attacks;

#[cfg(test)]
mod tests;
