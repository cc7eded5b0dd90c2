fn main(){
    use icon_glyphs::prelude::*;

    // a sketch scanned on grey paper
    let key = BackgroundKey::new([200, 200, 200], 30);

    let icon = image::open("images/sketch.jpg").unwrap().to_rgba8();
    let glyphs = GlyphSet::from_rgba(icon, key);

    glyphs.glyph.save("images/sketch_glyph.png").unwrap();
    glyphs.white.save("images/sketch_white.png").unwrap();
}
