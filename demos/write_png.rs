fn main(){
    let side = 64;
    let steps = 12;

    let thetas: Vec<f64> = (0..steps)
        .map(|step| step as f64 * std::f64::consts::TAU / steps as f64)
        .collect();

    write_strip(side, 6.0, &thetas);
}

fn write_strip(side: usize, eps: f64, thetas: &[f64]){
    use rotating_ball::prelude::*;
    use ndarray::Axis;

    let (images, _) = gen_data_s1(0, side, eps, Some(thetas), DEFAULT_SEED).unwrap();

    let mut imgbuf = image::GrayImage::new((side * thetas.len()) as u32, side as u32);
    for (index, ball) in images.axis_iter(Axis(0)).enumerate() {
        let tile = binary_piston_image::to_gray_u8_image(&ball);
        image::imageops::replace(&mut imgbuf, &tile, (index * side) as i64, 0);
    }

    imgbuf.save("rotating_ball.png").unwrap();
}
