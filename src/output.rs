use std::cell::RefCell;
use std::rc::Rc;


// Line-oriented sink that a game reports to.
pub trait Output {
    fn write_line(&mut self, line: &str);
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn write_line(&mut self, line: &str) { (**self).write_line(line) }
}

// Accumulates lines in memory. Clones share the same storage, so the caller can keep a handle
// while the game owns another one.
#[derive(Clone, Default, Debug)]
pub struct LineBuffer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl LineBuffer {
    pub fn new() -> Self { Self::default() }
    pub fn lines(&self) -> Vec<String> { self.lines.borrow().clone() }
    pub fn len(&self) -> usize { self.lines.borrow().len() }
    pub fn is_empty(&self) -> bool { self.lines.borrow().is_empty() }
    pub fn clear(&self) { self.lines.borrow_mut().clear(); }
}

impl Output for LineBuffer {
    fn write_line(&mut self, line: &str) { self.lines.borrow_mut().push(line.to_owned()); }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn write_line(&mut self, line: &str) { println!("{}", line); }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_lines() {
        let buffer = LineBuffer::new();
        let mut sink: Box<dyn Output> = Box::new(buffer.clone());
        sink.write_line("a");
        sink.write_line("b");
        assert_eq!(buffer.lines(), vec!["a".to_owned(), "b".to_owned()]);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
