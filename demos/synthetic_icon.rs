fn main(){
    let width = 31;
    let height = 79;

    write_glyphs_of_shape(512, 512, |x, y|{
        // this is a checkerboard pattern
        (x % width < width / 2) != (y % height < height / 2)
    });
}

fn write_glyphs_of_shape(
    width: u32, height: u32,
    shape_function: impl Fn(u32, u32) -> bool
){
    use icon_glyphs::prelude::*;

    let icon = image::RgbaImage::from_fn(width, height, |x, y| {
        if shape_function(x, y) { image::Rgba([0, 0, 255, 255]) }
        else { image::Rgba([250, 252, 255, 255]) }
    });

    icon.save("checker.png").unwrap();

    let paths = make_glyphs(std::path::Path::new("checker.png")).unwrap();
    println!("wrote {} and {}", paths.glyph.display(), paths.white.display());
}
