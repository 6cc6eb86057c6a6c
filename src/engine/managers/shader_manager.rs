use glow::HasContext;
use log::debug;

use crate::engine::config::ShaderDialect;
use crate::engine::error::{ DrawerError, Result };

pub const POSITION_ATTRIBUTE: &str = "aPosition";
pub const TEX_COORD_ATTRIBUTE: &str = "aTexCoord";
pub const MVP_UNIFORM: &str = "uMVPMatrix";
pub const TEXTURE_UNIFORM: &str = "uTexture";

/// Replaces the `#VERSION` placeholder of a bundled shader with the header
/// of the target dialect.
pub fn prepare_shader_source(source: &str, dialect: ShaderDialect) -> String {
    source.replace("#VERSION", dialect.header())
}

/// Linked table program with its attribute and uniform locations resolved
/// once up front.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    pub program: glow::Program,
    pub position_location: u32,
    pub tex_coord_location: u32,
    pub mvp_location: glow::UniformLocation,
    pub texture_location: glow::UniformLocation,
}

impl ShaderProgram {
    pub fn new(
        gl: &glow::Context,
        vertex_source: &str,
        fragment_source: &str,
        dialect: ShaderDialect
    ) -> Result<Self> {
        let vertex_source = prepare_shader_source(vertex_source, dialect);
        let fragment_source = prepare_shader_source(fragment_source, dialect);

        unsafe {
            let vs = compile_shader(gl, glow::VERTEX_SHADER, &vertex_source)?;
            let fs = match compile_shader(gl, glow::FRAGMENT_SHADER, &fragment_source) {
                Ok(fs) => fs,
                Err(e) => {
                    gl.delete_shader(vs);
                    return Err(e);
                }
            };

            let program = link_program(gl, vs, fs)?;

            match Self::resolve_locations(gl, program) {
                Ok(shader_program) => {
                    debug!("Linked table shader program ({:?})", dialect);
                    Ok(shader_program)
                }
                Err(e) => {
                    gl.delete_program(program);
                    Err(e)
                }
            }
        }
    }

    unsafe fn resolve_locations(gl: &glow::Context, program: glow::Program) -> Result<Self> {
        let position_location = gl
            .get_attrib_location(program, POSITION_ATTRIBUTE)
            .ok_or(DrawerError::MissingAttribute(POSITION_ATTRIBUTE))?;
        let tex_coord_location = gl
            .get_attrib_location(program, TEX_COORD_ATTRIBUTE)
            .ok_or(DrawerError::MissingAttribute(TEX_COORD_ATTRIBUTE))?;
        let mvp_location = gl
            .get_uniform_location(program, MVP_UNIFORM)
            .ok_or(DrawerError::MissingUniform(MVP_UNIFORM))?;
        let texture_location = gl
            .get_uniform_location(program, TEXTURE_UNIFORM)
            .ok_or(DrawerError::MissingUniform(TEXTURE_UNIFORM))?;

        Ok(Self {
            program,
            position_location,
            tex_coord_location,
            mvp_location,
            texture_location,
        })
    }

    pub fn use_program(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.program));
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    shader_type: u32,
    source: &str
) -> Result<glow::Shader> {
    let stage = stage_name(shader_type);
    let shader = gl
        .create_shader(shader_type)
        .map_err(|e| DrawerError::gl_object("shader", e))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(DrawerError::ShaderCompile { stage, log });
    }
    debug!("Compiled {} shader", stage);
    Ok(shader)
}

unsafe fn link_program(
    gl: &glow::Context,
    vs: glow::Shader,
    fs: glow::Shader
) -> Result<glow::Program> {
    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            gl.delete_shader(vs);
            gl.delete_shader(fs);
            return Err(DrawerError::gl_object("program", e));
        }
    };
    gl.attach_shader(program, vs);
    gl.attach_shader(program, fs);
    gl.link_program(program);

    gl.detach_shader(program, vs);
    gl.detach_shader(program, fs);
    gl.delete_shader(vs);
    gl.delete_shader(fs);

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(DrawerError::ProgramLink(log));
    }
    Ok(program)
}
