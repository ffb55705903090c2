#[macro_export]
macro_rules! ok_or_continue {
    ( $e:expr ) => {
        match $e {
            Ok(value) => value,
            Err(_e) => continue,
        }
    };
}

/// A fixed-size two-dimensional array, stored row-major in a single `Vec`.
#[derive(Clone, PartialEq, Debug)]
pub struct Array2d<T: Default + Clone> {
    width: u32,
    height: u32,
    vec: Vec<T>,
}

impl<T: Default + Clone> Array2d<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vec: vec![T::default(); (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.vec.get((y * self.width + x) as usize)
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.vec.get_mut((y * self.width + x) as usize)
    }

    pub fn fill(&mut self, value: T) {
        self.vec.fill(value);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
