use log::error;
use std::process;
use support::{
    app::{run_app, setup_app, App},
    logger::create_logger,
    opengl::{GeometryBuffer, Renderer, ShaderProgram, VertexAttribute, VertexLayout},
};

const WINDOW_TITLE: &str = "Hello OpenGL";
const BACKGROUND_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

const VERTEX_SHADER_SOURCE: &str = r#"
#version 450
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;
layout (location = 0) out vec3 vertexColor;
void main()
{
    gl_Position = vec4(aPos, 1.0);
    vertexColor = aColor;
}
"#;

const FRAGMENT_SHADER_SOURCE: &str = r#"
#version 450
layout (location = 0) in vec3 vertexColor;
layout (location = 0) out vec4 fragColor;
uniform vec4 ourColor;
void main()
{
    fragColor = vec4(vertexColor, 1.0) * ourColor;
}
"#;

#[rustfmt::skip]
const QUAD_VERTICES: [f32; 24] = [
    // position         // color
     0.5,  0.5, 0.0,    1.0, 0.0, 0.0, // top right
     0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 0.0, 1.0, // bottom left
    -0.5,  0.5, 0.0,    1.0, 1.0, 1.0, // top left
];

const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

fn quad_layout() -> VertexLayout {
    VertexLayout::new(vec![
        VertexAttribute {
            location: 0,
            components: 3,
        },
        VertexAttribute {
            location: 1,
            components: 3,
        },
    ])
}

/// Maps elapsed seconds to a [0, 1] brightness pulse.
fn pulse(seconds: f32) -> f32 {
    seconds.sin() * 0.5 + 0.5
}

#[derive(Default)]
struct DemoApp {
    program: Option<ShaderProgram>,
    geometry: Option<GeometryBuffer>,
}

impl App for DemoApp {
    fn initialize(&mut self, renderer: &mut Renderer) {
        let context = renderer.context.clone();

        match ShaderProgram::new(context.clone(), VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE) {
            Ok(program) => self.program = Some(program),
            Err(error) => error!("Failed to create the shader program: {}", error),
        }

        match GeometryBuffer::new(context, &QUAD_VERTICES, Some(&QUAD_INDICES), &quad_layout()) {
            Ok(geometry) => self.geometry = Some(geometry),
            Err(error) => error!("Failed to upload the quad geometry: {}", error),
        }
    }

    fn draw(&mut self, renderer: &mut Renderer) {
        renderer.clear(BACKGROUND_COLOR);

        if let (Some(program), Some(geometry)) = (self.program.as_ref(), self.geometry.as_ref()) {
            program.activate();
            let green = pulse(renderer.elapsed_seconds());
            program.set_uniform_vec4("ourColor", [0.0, green, 0.0, 1.0]);
            geometry.draw();
        }
    }
}

fn main() {
    create_logger();

    let (event_loop, renderer) = match setup_app(WINDOW_TITLE) {
        Ok(setup) => setup,
        Err(error) => {
            error!("Failed to set up the application: {}", error);
            process::exit(1);
        }
    };

    run_app(DemoApp::default(), event_loop, renderer);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOATS_PER_VERTEX: usize = 6;

    fn position(index: u32) -> [f32; 2] {
        let base = index as usize * FLOATS_PER_VERTEX;
        [QUAD_VERTICES[base], QUAD_VERTICES[base + 1]]
    }

    fn triangle_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
        ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0
    }

    #[test]
    fn indices_stay_within_vertex_range() {
        let vertex_count = (QUAD_VERTICES.len() / FLOATS_PER_VERTEX) as u32;
        assert_eq!(vertex_count, 4);
        assert!(QUAD_INDICES.iter().all(|&index| index < vertex_count));
    }

    #[test]
    fn triangles_share_the_diagonal_and_tile_the_quad() {
        let (first, second) = QUAD_INDICES.split_at(3);

        let shared: Vec<u32> = first
            .iter()
            .filter(|index| second.contains(*index))
            .copied()
            .collect();
        assert_eq!(shared, vec![1, 3]);

        let mut referenced = QUAD_INDICES.to_vec();
        referenced.sort_unstable();
        referenced.dedup();
        assert_eq!(referenced, vec![0, 1, 2, 3]);

        // Both halves are non-degenerate and together cover the 1 x 1 quad.
        let first_area = triangle_area(position(first[0]), position(first[1]), position(first[2]));
        let second_area =
            triangle_area(position(second[0]), position(second[1]), position(second[2]));
        assert!(first_area > 0.0 && second_area > 0.0);
        assert!((first_area + second_area - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pulse_follows_the_sine_mapping() {
        for &seconds in &[0.0_f32, 0.5, 1.0, std::f32::consts::PI, 10.0, 100.0] {
            let value = pulse(seconds);
            assert_eq!(value, seconds.sin() * 0.5 + 0.5);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn shader_sources_declare_entry_points() {
        assert!(VERTEX_SHADER_SOURCE.contains("void main()"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("void main()"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("uniform vec4 ourColor"));
    }

    #[test]
    fn quad_layout_matches_the_interleaved_buffer() {
        let layout = quad_layout();
        assert_eq!(
            layout.stride() as usize,
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
        assert_eq!(QUAD_VERTICES.len() % FLOATS_PER_VERTEX, 0);
    }
}
