
use ndarray::{ArrayBase, Data, Ix2};

/// Represents an image with each pixel being either true or false,
/// corresponding to inside-the-ball and outside-of-the-ball respectively.
/// Every two-dimensional disc mask is a binary image,
/// with the rows along `y` and the columns along `x`.
pub trait BinaryImage {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn is_inside(&self, x: usize, y: usize) -> bool;
}

impl<S> BinaryImage for ArrayBase<S, Ix2> where S: Data<Elem = u8> {
    #[inline]
    fn width(&self) -> usize {
        self.ncols()
    }

    #[inline]
    fn height(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn is_inside(&self, x: usize, y: usize) -> bool {
        self[[y, x]] != 0
    }
}

/// Convert binary images to piston images.
#[cfg(feature = "piston_image")]
pub mod piston_image {
    use image::{GrayImage, Luma};
    use super::BinaryImage;

    /// Create a grey-scale piston image
    /// with inside pixels white and outside pixels black.
    pub fn to_gray_u8_image(image: &impl BinaryImage) -> GrayImage {
        to_gray_u8_image_with_values(image, 255, 0)
    }

    /// Create a grey-scale piston image
    /// with the specified brightness for inside and outside pixels.
    pub fn to_gray_u8_image_with_values(image: &impl BinaryImage, inside: u8, outside: u8) -> GrayImage {
        GrayImage::from_fn(image.width() as u32, image.height() as u32, |x, y| {
            Luma([if image.is_inside(x as usize, y as usize) { inside } else { outside }])
        })
    }

}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{gen_data_s1, DEFAULT_SEED};
    use ndarray::{arr2, Axis};

    #[test]
    fn rows_are_y_and_columns_are_x() {
        let mask = arr2(&[[0_u8, 1, 0], [0, 0, 0]]);
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert!(mask.is_inside(1, 0));
        assert!(!mask.is_inside(0, 1));
    }

    #[test]
    fn generated_images_are_binary_images() {
        let (images, _) = gen_data_s1(1, 4, 1.0, Some(&[0.0][..]), DEFAULT_SEED).unwrap();
        let image = images.index_axis(Axis(0), 0);

        assert_eq!((image.width(), image.height()), (4, 4));

        // the center sits at row 2.5 and column 1.5
        assert!(image.is_inside(2, 2));
        assert!(image.is_inside(1, 3));
        assert!(!image.is_inside(3, 2));
    }
}
